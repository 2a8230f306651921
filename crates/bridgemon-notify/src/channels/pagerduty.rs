use crate::error::NotifyError;
use crate::NotificationChannel;
use anyhow::Result;
use async_trait::async_trait;
use bridgemon_common::types::AlertEvent;
use reqwest::StatusCode;
use serde_json::Value;
use tracing;

/// PagerDuty Events API v2 enqueue endpoint.
pub const EVENTS_API_URL: &str = "https://events.pagerduty.com/v2/enqueue";

/// Paging through PagerDuty trigger events.
pub struct PagerDutyChannel {
    client: reqwest::Client,
    api_url: String,
    routing_key: String,
    source_label: String,
}

impl PagerDutyChannel {
    pub fn new(routing_key: &str, source_label: &str) -> Self {
        Self::with_api_url(EVENTS_API_URL, routing_key, source_label)
    }

    /// Points the channel at an alternate Events API endpoint.
    pub fn with_api_url(api_url: &str, routing_key: &str, source_label: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            routing_key: routing_key.to_string(),
            source_label: source_label.to_string(),
        }
    }

    pub(crate) fn trigger_payload(&self, alert: &AlertEvent) -> Value {
        serde_json::json!({
            "routing_key": self.routing_key,
            "event_action": "trigger",
            "payload": {
                "summary": format!("{} {}", self.source_label, alert.message),
                "source": self.source_label,
                // A page is always critical, whatever severity the alert
                // itself carried.
                "severity": "critical",
            },
        })
    }
}

#[async_trait]
impl NotificationChannel for PagerDutyChannel {
    async fn send(&self, alert: &AlertEvent) -> Result<()> {
        let payload = self.trigger_payload(alert);

        let response = self
            .client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(NotifyError::Http)?;

        let status = response.status();
        if status != StatusCode::ACCEPTED {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                service: "pagerduty".to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::debug!(metric = %alert.metric, "PagerDuty alert enqueued");
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "pagerduty"
    }
}
