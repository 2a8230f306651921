use bridgemon_common::types::{AlertEvent, ObservedValue, Severity};
use chrono::{DateTime, Utc};

/// Decision rule for liveness counters (e.g. a process uptime gauge).
///
/// The counter is expected to grow every cycle. A value identical to the
/// previous cycle means the exporter is wedged; a value that moved but
/// sits below `restart_threshold` means the process came back up
/// recently. The first observation of a key only seeds state.
pub fn evaluate(
    obs: &ObservedValue,
    previous: Option<i64>,
    restart_threshold: i64,
    now: DateTime<Utc>,
) -> Option<AlertEvent> {
    let previous = previous?;

    if obs.value == previous {
        return Some(AlertEvent {
            metric: obs.metric_key.clone(),
            severity: Severity::Warning,
            message: format!(
                "{} has not changed. Current value: {}",
                obs.metric_key, obs.value
            ),
            value: obs.value,
            timestamp: now,
        });
    }

    if obs.value < restart_threshold {
        return Some(AlertEvent {
            metric: obs.metric_key.clone(),
            severity: Severity::Critical,
            message: format!(
                "{} seems to have restarted. Current value: {}",
                obs.metric_key, obs.value
            ),
            value: obs.value,
            timestamp: now,
        });
    }

    None
}
