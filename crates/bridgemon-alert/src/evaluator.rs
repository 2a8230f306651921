use crate::rules;
use crate::state::StateStore;
use bridgemon_common::types::{AlertEvent, MetricKind, MetricSpec, ObservedValue};
use chrono::Utc;

/// Cross-metric correlation input for request-counter rules.
///
/// `current` is the liveness value as of this cycle; `previous_marker`
/// is the liveness value recorded at the end of the previous cycle.
/// Passed explicitly so the request rule never reaches into shared state
/// by key convention.
#[derive(Debug, Clone, Copy)]
pub struct LivenessContext {
    pub current: i64,
    pub previous_marker: Option<i64>,
}

/// Policy constants, externally supplied.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// A liveness value below this (in the counter's unit) is treated as
    /// a fresh restart.
    pub restart_threshold: i64,
    /// Minimum liveness before a flat request counter is suspicious.
    pub uptime_grace: i64,
}

/// The stateful evaluation engine: one instance per process, constructed
/// at startup and driven once per cycle by the scheduler.
pub struct Evaluator {
    store: StateStore,
    thresholds: Thresholds,
}

impl Evaluator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            store: StateStore::new(),
            thresholds,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Runs one evaluation cycle over the matched observations.
    ///
    /// Liveness counters are evaluated before request counters so request
    /// rules always correlate against this cycle's liveness value, no
    /// matter where the liveness line sat in the feed. All state updates
    /// for the cycle happen here; a cycle that never reaches this point
    /// (scrape failure) leaves the store untouched.
    pub fn evaluate_cycle(
        &mut self,
        specs: &[MetricSpec],
        observed: &[ObservedValue],
    ) -> Vec<AlertEvent> {
        debug_assert_eq!(specs.len(), observed.len());
        let now = Utc::now();
        let mut events = Vec::new();
        let mut liveness_obs: Option<&ObservedValue> = None;

        for (spec, obs) in specs.iter().zip(observed) {
            if spec.kind != MetricKind::LivenessCounter {
                continue;
            }
            let previous = self.store.get(&obs.metric_key);
            if let Some(event) =
                rules::liveness::evaluate(obs, previous, self.thresholds.restart_threshold, now)
            {
                events.push(event);
            }
            self.store.set(&obs.metric_key, obs.value);
            if liveness_obs.is_none() {
                liveness_obs = Some(obs);
            }
        }

        // Only a value actually seen in the feed advances the liveness
        // context; the absence sentinel stays confined to the key map.
        if let Some(obs) = liveness_obs {
            if obs.present {
                self.store.set_liveness_current(obs.value);
            }
        }

        let context = self.store.liveness_current().map(|current| LivenessContext {
            current,
            previous_marker: self.store.liveness_marker(),
        });

        for (spec, obs) in specs.iter().zip(observed) {
            if spec.kind != MetricKind::RequestCounter {
                continue;
            }
            let previous = self.store.get(&obs.metric_key);
            if let Some(event) = rules::request_counter::evaluate(
                obs,
                previous,
                context,
                self.thresholds.uptime_grace,
                now,
            ) {
                events.push(event);
            }
            self.store.set(&obs.metric_key, obs.value);
        }

        // The marker intentionally lags one cycle: it is only advanced
        // here, after every request counter compared against it, so next
        // cycle's "is liveness progressing" check looks back exactly one
        // cycle.
        if let Some(ctx) = context {
            self.store.set_liveness_marker(ctx.current);
        }

        tracing::debug!(
            observed = observed.len(),
            alerts = events.len(),
            tracked = self.store.len(),
            "Evaluation cycle complete"
        );

        events
    }
}
