use crate::error::NotifyError;
use crate::NotificationChannel;
use anyhow::Result;
use async_trait::async_trait;
use bridgemon_common::types::{AlertEvent, Severity};
use tracing;

/// Chat notification through a Slack incoming webhook.
pub struct SlackChannel {
    client: reqwest::Client,
    webhook_url: String,
    source_label: String,
}

impl SlackChannel {
    pub fn new(webhook_url: &str, source_label: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.to_string(),
            source_label: source_label.to_string(),
        }
    }

    pub(crate) fn render_text(&self, alert: &AlertEvent) -> String {
        format!(
            "[{}] \n{}: {}",
            self.source_label,
            severity_label(alert.severity),
            alert.message
        )
    }
}

#[async_trait]
impl NotificationChannel for SlackChannel {
    async fn send(&self, alert: &AlertEvent) -> Result<()> {
        let payload = serde_json::json!({ "text": self.render_text(alert) });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(NotifyError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                service: "slack".to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::debug!(metric = %alert.metric, "Slack alert delivered");
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "slack"
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "Warning",
        Severity::Critical => "Critical",
    }
}
