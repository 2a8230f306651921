use crate::NotificationChannel;
use bridgemon_common::types::AlertEvent;
use tracing;

/// Fans a single alert event out to every configured channel.
///
/// Delivery failures are logged and swallowed: one channel failing never
/// affects the other channels, future cycles, or the evaluator's state.
pub struct NotificationManager {
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl NotificationManager {
    pub fn new(channels: Vec<Box<dyn NotificationChannel>>) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &[Box<dyn NotificationChannel>] {
        &self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub async fn notify(&self, event: &AlertEvent) {
        for channel in &self.channels {
            if let Err(e) = channel.send(event).await {
                tracing::error!(
                    channel = channel.channel_name(),
                    error = %e,
                    "Failed to send notification"
                );
            }
        }
    }
}
