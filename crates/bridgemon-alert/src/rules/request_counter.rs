use crate::evaluator::LivenessContext;
use bridgemon_common::types::{AlertEvent, ObservedValue, Severity};
use chrono::{DateTime, Utc};

/// Decision rule for monotonic request counters, gated by liveness.
///
/// A flat counter is only suspicious once the service has been up past
/// `uptime_grace` and the liveness counter is still progressing; right
/// after a restart, zero traffic is expected quiescence. With no
/// liveness context at all the rule stays conservative: a flat or
/// missing counter is reported, since the lack of correlation data is
/// itself suspicious. The first observation of a key only seeds state.
pub fn evaluate(
    obs: &ObservedValue,
    previous: Option<i64>,
    context: Option<LivenessContext>,
    uptime_grace: i64,
    now: DateTime<Utc>,
) -> Option<AlertEvent> {
    let previous = previous?;

    if obs.value != previous {
        return None;
    }

    let Some(ctx) = context else {
        return Some(AlertEvent {
            metric: obs.metric_key.clone(),
            severity: Severity::Warning,
            message: format!(
                "{} metric data is missing or unchanged. Current value: {}",
                obs.metric_key, obs.value
            ),
            value: obs.value,
            timestamp: now,
        });
    };

    // With no marker yet, any positive uptime counts as progressing.
    let progressing = ctx
        .previous_marker
        .map_or(ctx.current > 0, |marker| ctx.current > marker);

    if progressing && ctx.current > uptime_grace {
        return Some(AlertEvent {
            metric: obs.metric_key.clone(),
            severity: Severity::Warning,
            message: format!(
                "{} has not changed and uptime is over {}s. Current value: {}",
                obs.metric_key, uptime_grace, obs.value
            ),
            value: obs.value,
            timestamp: now,
        });
    }

    None
}
