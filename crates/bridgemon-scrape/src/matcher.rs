use bridgemon_common::types::{MetricSpec, ObservedValue};

/// Extracts one [`ObservedValue`] per declared spec from the feed body,
/// in spec order.
///
/// A line matches a spec when it contains the spec's name as a substring
/// and every label filter as a substring, in any order. The value is the
/// last whitespace-separated token on the line, parsed as an integer; a
/// token that fails to parse is skipped with a diagnostic and never
/// aborts the cycle. When several lines match the same spec, the later
/// occurrence wins. When no line matches, the observation is recorded as
/// absent with the 0 sentinel so later cycles have a baseline.
pub fn match_specs(body: &str, specs: &[MetricSpec]) -> Vec<ObservedValue> {
    let mut observed: Vec<ObservedValue> = specs
        .iter()
        .map(|spec| ObservedValue {
            metric_key: spec.key(),
            value: 0,
            present: false,
        })
        .collect();

    for line in body.lines() {
        for (spec, obs) in specs.iter().zip(observed.iter_mut()) {
            if !line_matches(line, spec) {
                continue;
            }
            match extract_value(line) {
                Some(value) => {
                    obs.value = value;
                    obs.present = true;
                }
                None => {
                    tracing::warn!(metric = %spec.name, line, "Failed to parse metric value");
                }
            }
        }
    }

    observed
}

fn line_matches(line: &str, spec: &MetricSpec) -> bool {
    line.contains(&spec.name)
        && spec
            .label_filters
            .iter()
            .all(|filter| line.contains(filter.as_str()))
}

fn extract_value(line: &str) -> Option<i64> {
    line.split_whitespace().next_back()?.parse().ok()
}
