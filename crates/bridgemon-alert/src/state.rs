use std::collections::HashMap;

/// Last-known metric values, keyed by [`MetricSpec::key`].
///
/// Owned and mutated exclusively by the [`Evaluator`]: empty at process
/// start, entries created on first observation, updated every cycle,
/// never deleted. Absent metrics are recorded with the 0 sentinel so
/// subsequent cycles always have a comparison baseline.
///
/// Beside the per-key map, the store keeps two liveness slots: the last
/// value the liveness counter was actually seen at (`liveness_current`,
/// unaffected by absence sentinels), and the one-cycle-lagged shadow copy
/// (`liveness_marker`) that request-counter rules compare against.
///
/// [`MetricSpec::key`]: bridgemon_common::types::MetricSpec::key
/// [`Evaluator`]: crate::evaluator::Evaluator
#[derive(Debug, Default)]
pub struct StateStore {
    values: HashMap<String, i64>,
    liveness_current: Option<i64>,
    liveness_marker: Option<i64>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    pub fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last value the liveness counter was observed at, `None` until the
    /// counter has appeared in the feed at least once.
    pub fn liveness_current(&self) -> Option<i64> {
        self.liveness_current
    }

    pub fn set_liveness_current(&mut self, value: i64) {
        self.liveness_current = Some(value);
    }

    /// The liveness value recorded at the end of the previous cycle.
    pub fn liveness_marker(&self) -> Option<i64> {
        self.liveness_marker
    }

    pub fn set_liveness_marker(&mut self, value: i64) {
        self.liveness_marker = Some(value);
    }
}
