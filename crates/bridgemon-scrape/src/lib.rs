//! Pulling and filtering the monitored service's metrics feed.
//!
//! The [`ScrapeClient`] performs one outbound request per cycle against a
//! Prometheus-style text endpoint; [`matcher::match_specs`] then extracts
//! the watchlist values from the returned body. Transport failures are
//! typed so the caller can abandon the cycle before any state is touched.

pub mod client;
pub mod error;
pub mod matcher;


pub use client::ScrapeClient;
pub use error::ScrapeError;
