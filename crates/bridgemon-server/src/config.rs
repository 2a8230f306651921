use bridgemon_common::types::MetricSpec;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Prometheus-style text endpoint of the monitored service.
    pub metrics_url: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_scrape_timeout_secs")]
    pub scrape_timeout_secs: u64,
    /// A liveness value below this (in the counter's unit, seconds for
    /// an uptime gauge) is treated as a fresh restart.
    #[serde(default = "default_restart_threshold_secs")]
    pub restart_threshold_secs: i64,
    /// Minimum liveness before a flat request counter is suspicious.
    #[serde(default = "default_uptime_grace_secs")]
    pub uptime_grace_secs: i64,
    /// Label identifying the monitored service in outgoing alerts.
    #[serde(default = "default_source_label")]
    pub source_label: String,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub pagerduty: PagerDutyConfig,
    /// The watchlist: which feed entries to track, and how.
    #[serde(default)]
    pub metrics: Vec<MetricSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagerDutyConfig {
    pub routing_key: Option<String>,
}

fn default_http_port() -> u16 {
    6262
}

fn default_poll_interval_secs() -> u64 {
    600
}

fn default_scrape_timeout_secs() -> u64 {
    10
}

fn default_restart_threshold_secs() -> i64 {
    3600
}

fn default_uptime_grace_secs() -> i64 {
    3600
}

fn default_source_label() -> String {
    "bridge".to_string()
}

impl ServerConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Secrets may come from the environment (or a .env file) instead of
    /// the config file.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SLACK_WEBHOOK_URL") {
            if !url.is_empty() {
                self.slack.webhook_url = Some(url);
            }
        }
        if let Ok(key) = std::env::var("PAGERDUTY_ROUTING_KEY") {
            if !key.is_empty() {
                self.pagerduty.routing_key = Some(key);
            }
        }
    }
}
