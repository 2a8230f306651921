use crate::error::{Result, ScrapeError};
use std::time::Duration;

/// HTTP client for the metrics endpoint of the monitored service.
pub struct ScrapeClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl ScrapeClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the raw text exposition body.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Transport`] when the request cannot be
    /// completed and [`ScrapeError::Status`] on a non-success status.
    pub async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ScrapeError::Transport {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ScrapeError::Transport {
            url: self.url.clone(),
            source: e,
        })
    }
}
