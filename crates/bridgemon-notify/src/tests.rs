use crate::channels::pagerduty::PagerDutyChannel;
use crate::channels::slack::SlackChannel;
use crate::manager::NotificationManager;
use crate::NotificationChannel;
use anyhow::Result;
use async_trait::async_trait;
use bridgemon_common::types::{AlertEvent, Severity};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn warning_event() -> AlertEvent {
    AlertEvent {
        metric: r#"uptime{process="bridge"}"#.to_string(),
        severity: Severity::Warning,
        message: r#"uptime{process="bridge"} has not changed. Current value: 50"#.to_string(),
        value: 50,
        timestamp: Utc::now(),
    }
}

#[test]
fn slack_text_includes_source_and_severity() {
    let channel = SlackChannel::new("https://hooks.slack.com/services/test", "bridge");
    let text = channel.render_text(&warning_event());

    assert!(text.starts_with("[bridge] \n"), "{text}");
    assert!(text.contains("Warning: uptime"), "{text}");
}

#[test]
fn pagerduty_payload_severity_is_always_critical() {
    let channel = PagerDutyChannel::new("routing-key-test", "bridge");
    let payload = channel.trigger_payload(&warning_event());

    assert_eq!(payload["event_action"], "trigger");
    assert_eq!(payload["routing_key"], "routing-key-test");
    assert_eq!(payload["payload"]["severity"], "critical");
    assert_eq!(payload["payload"]["source"], "bridge");
    let summary = payload["payload"]["summary"].as_str().unwrap();
    assert!(summary.starts_with("bridge "), "{summary}");
    assert!(summary.contains("has not changed"), "{summary}");
}

#[tokio::test]
async fn slack_send_posts_text_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(body_string_contains("has not changed"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let channel = SlackChannel::new(&format!("{}/hook", server.uri()), "bridge");
    channel.send(&warning_event()).await.unwrap();
}

#[tokio::test]
async fn slack_send_fails_on_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let channel = SlackChannel::new(&server.uri(), "bridge");
    let err = channel.send(&warning_event()).await.unwrap_err();
    assert!(err.to_string().contains("slack"), "{err}");
}

#[tokio::test]
async fn pagerduty_send_requires_accepted_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/enqueue"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let channel = PagerDutyChannel::with_api_url(
        &format!("{}/v2/enqueue", server.uri()),
        "routing-key-test",
        "bridge",
    );
    channel.send(&warning_event()).await.unwrap();
}

#[tokio::test]
async fn pagerduty_send_fails_on_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid routing key"))
        .mount(&server)
        .await;

    let channel = PagerDutyChannel::with_api_url(&server.uri(), "bad-key", "bridge");
    let err = channel.send(&warning_event()).await.unwrap_err();
    assert!(err.to_string().contains("pagerduty"), "{err}");
}

// ── Manager fan-out ──

struct FailingChannel;

#[async_trait]
impl NotificationChannel for FailingChannel {
    async fn send(&self, _alert: &AlertEvent) -> Result<()> {
        Err(anyhow::anyhow!("channel down"))
    }

    fn channel_name(&self) -> &str {
        "failing"
    }
}

struct RecordingChannel {
    sent: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    async fn send(&self, alert: &AlertEvent) -> Result<()> {
        self.sent.lock().unwrap().push(alert.message.clone());
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "recording"
    }
}

#[tokio::test]
async fn manager_continues_past_failing_channel() {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let manager = NotificationManager::new(vec![
        Box::new(FailingChannel),
        Box::new(RecordingChannel { sent: sent.clone() }),
    ]);

    manager.notify(&warning_event()).await;

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1, "second channel must still receive the event");
    assert!(sent[0].contains("has not changed"));
}
