//! Process glue for the bridgemon sidecar: configuration, the health
//! endpoint, and the cycle scheduler that drives scrape → match →
//! evaluate → notify.

pub mod config;
pub mod health;
pub mod scheduler;
