//! Notification delivery for alert events.
//!
//! Every alert is fanned out by the [`manager::NotificationManager`] to
//! each configured [`NotificationChannel`]. Built-in channels cover a
//! Slack incoming webhook and the PagerDuty Events API.

pub mod channels;
pub mod error;
pub mod manager;

#[cfg(test)]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use bridgemon_common::types::AlertEvent;

/// A notification delivery channel that sends alert events to an
/// external service.
///
/// Implementations are registered in the [`manager::NotificationManager`]
/// at startup. Delivery is a single attempt per event; the monitoring
/// loop's next cycle is the natural retry.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Delivers the alert event through this channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable or answers with a
    /// non-success status.
    async fn send(&self, alert: &AlertEvent) -> Result<()>;

    /// Returns the channel type name (e.g., `"slack"`, `"pagerduty"`).
    fn channel_name(&self) -> &str;
}
