use bridgemon_alert::evaluator::{Evaluator, Thresholds};
use bridgemon_common::types::{AlertEvent, MetricSpec, Severity};
use bridgemon_notify::manager::NotificationManager;
use bridgemon_scrape::{matcher, ScrapeClient};
use chrono::Utc;
use tokio::time::{interval, Duration};

/// Drives the fetch → match → evaluate → notify sequence: once
/// immediately at startup, then on a fixed interval, forever.
///
/// Cycles are strictly sequential; the next tick's work only starts
/// after the previous cycle completed. No single cycle failure is fatal:
/// a failed scrape is escalated through the notification sink and the
/// loop waits for the next tick.
pub struct Scheduler {
    client: ScrapeClient,
    specs: Vec<MetricSpec>,
    evaluator: Evaluator,
    notifier: NotificationManager,
    poll_interval: Duration,
}

impl Scheduler {
    pub fn new(
        client: ScrapeClient,
        specs: Vec<MetricSpec>,
        thresholds: Thresholds,
        notifier: NotificationManager,
        poll_interval: Duration,
    ) -> Self {
        Self {
            client,
            specs,
            evaluator: Evaluator::new(thresholds),
            notifier,
            poll_interval,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub async fn run(&mut self) {
        tracing::info!(
            interval_secs = self.poll_interval.as_secs(),
            metrics = self.specs.len(),
            url = self.client.url(),
            "Starting monitoring loop"
        );

        // The first tick completes immediately, giving the startup cycle.
        let mut tick = interval(self.poll_interval);
        loop {
            tick.tick().await;
            self.run_cycle().await;
        }
    }

    /// One full evaluation cycle. Returns the alerts that were emitted.
    ///
    /// A scrape failure abandons the cycle before any state is touched
    /// and is itself escalated as a critical alert: an unreachable
    /// metrics endpoint means the monitored process is unobservable.
    pub async fn run_cycle(&mut self) -> Vec<AlertEvent> {
        let body = match self.client.fetch().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Metrics scrape failed");
                let event = AlertEvent {
                    metric: "scrape".to_string(),
                    severity: Severity::Critical,
                    message: format!("failed to scrape metrics endpoint: {e}"),
                    value: 0,
                    timestamp: Utc::now(),
                };
                self.notifier.notify(&event).await;
                return vec![event];
            }
        };

        let observed = matcher::match_specs(&body, &self.specs);
        for obs in &observed {
            tracing::debug!(
                metric = %obs.metric_key,
                value = obs.value,
                present = obs.present,
                "Observed"
            );
        }

        let events = self.evaluator.evaluate_cycle(&self.specs, &observed);
        for event in &events {
            tracing::warn!(
                metric = %event.metric,
                severity = %event.severity,
                message = %event.message,
                "Alert fired"
            );
            self.notifier.notify(event).await;
        }

        events
    }
}
