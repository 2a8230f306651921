use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity level, ordered from lowest to highest.
///
/// # Examples
///
/// ```
/// use bridgemon_common::types::Severity;
///
/// let sev: Severity = "warning".parse().unwrap();
/// assert_eq!(sev, Severity::Warning);
/// assert_eq!(sev.to_string(), "warning");
/// assert!(Severity::Critical > Severity::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// How a watched metric is interpreted by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Expected to grow monotonically every cycle while the monitored
    /// process is healthy (e.g. a process uptime gauge).
    LivenessCounter,
    /// Expected to grow with traffic; flatlining is only suspicious
    /// once the liveness counter shows sustained uptime.
    #[serde(alias = "monotonic-request-counter")]
    RequestCounter,
}

/// A metric to watch in the scraped feed. Immutable, defined at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSpec {
    /// Substring the feed line must contain (the exposition metric name).
    pub name: String,
    /// Substrings that must all be present on a matching line,
    /// order-independent (e.g. `type="handle_eth_tx_hash"`).
    #[serde(default)]
    pub label_filters: Vec<String>,
    pub kind: MetricKind,
}

impl MetricSpec {
    /// State-store key for this spec, unique per (name, filters) pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use bridgemon_common::types::{MetricKind, MetricSpec};
    ///
    /// let spec = MetricSpec {
    ///     name: "uptime".into(),
    ///     label_filters: vec![r#"process="bridge""#.into()],
    ///     kind: MetricKind::LivenessCounter,
    /// };
    /// assert_eq!(spec.key(), r#"uptime{process="bridge"}"#);
    /// ```
    pub fn key(&self) -> String {
        if self.label_filters.is_empty() {
            self.name.clone()
        } else {
            format!("{}{{{}}}", self.name, self.label_filters.join(","))
        }
    }
}

/// One extraction result per declared spec per cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedValue {
    /// Key derived from the matching spec, see [`MetricSpec::key`].
    pub metric_key: String,
    pub value: i64,
    /// False when no feed line matched the spec this cycle; `value` is
    /// then the 0 sentinel.
    pub present: bool,
}

/// An alert produced by the evaluator, consumed by the notification
/// channels. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEvent {
    /// The metric key (or subsystem label) the alert is about.
    pub metric: String,
    pub severity: Severity,
    pub message: String,
    /// The observed value that triggered the alert.
    pub value: i64,
    pub timestamp: DateTime<Utc>,
}
