use bridgemon_common::types::MetricKind;
use bridgemon_server::config::ServerConfig;
use std::io::Write;

#[test]
fn load_applies_defaults_and_parses_watchlist() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
metrics_url = "http://127.0.0.1:9183/metrics"

[[metrics]]
name = "uptime"
label_filters = ['process="bridge"']
kind = "liveness-counter"

[[metrics]]
name = "bridge_requests_ok"
kind = "monotonic-request-counter"
"#
    )
    .unwrap();

    let config = ServerConfig::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.metrics_url, "http://127.0.0.1:9183/metrics");
    assert_eq!(config.http_port, 6262);
    assert_eq!(config.poll_interval_secs, 600);
    assert_eq!(config.scrape_timeout_secs, 10);
    assert_eq!(config.restart_threshold_secs, 3600);
    assert_eq!(config.uptime_grace_secs, 3600);
    assert_eq!(config.source_label, "bridge");

    assert_eq!(config.metrics.len(), 2);
    assert_eq!(config.metrics[0].kind, MetricKind::LivenessCounter);
    assert_eq!(config.metrics[0].label_filters, vec![r#"process="bridge""#]);
    // The long-form kind name is accepted as an alias.
    assert_eq!(config.metrics[1].kind, MetricKind::RequestCounter);
    assert!(config.metrics[1].label_filters.is_empty());
}

#[test]
fn load_rejects_missing_required_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "http_port = 6262\n").unwrap();

    assert!(ServerConfig::load(file.path().to_str().unwrap()).is_err());
}
