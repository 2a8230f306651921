use anyhow::Result;
use bridgemon_alert::evaluator::Thresholds;
use bridgemon_notify::channels::pagerduty::PagerDutyChannel;
use bridgemon_notify::channels::slack::SlackChannel;
use bridgemon_notify::manager::NotificationManager;
use bridgemon_notify::NotificationChannel;
use bridgemon_scrape::ScrapeClient;
use bridgemon_server::config::ServerConfig;
use bridgemon_server::health;
use bridgemon_server::scheduler::Scheduler;
use std::time::Duration;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bridgemon=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/server.toml".to_string());
    let config = ServerConfig::load(&config_path)?;

    if config.metrics.is_empty() {
        anyhow::bail!("no metrics configured; add [[metrics]] entries to {config_path}");
    }

    tracing::info!(
        url = %config.metrics_url,
        metrics = config.metrics.len(),
        "bridgemon starting"
    );

    let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();
    match &config.slack.webhook_url {
        Some(url) => channels.push(Box::new(SlackChannel::new(url, &config.source_label))),
        None => tracing::warn!("SLACK_WEBHOOK_URL is not set; Slack alerts disabled"),
    }
    match &config.pagerduty.routing_key {
        Some(key) => channels.push(Box::new(PagerDutyChannel::new(key, &config.source_label))),
        None => tracing::warn!("PAGERDUTY_ROUTING_KEY is not set; paging disabled"),
    }
    let notifier = NotificationManager::new(channels);

    let client = ScrapeClient::new(
        &config.metrics_url,
        Duration::from_secs(config.scrape_timeout_secs),
    );
    let thresholds = Thresholds {
        restart_threshold: config.restart_threshold_secs,
        uptime_grace: config.uptime_grace_secs,
    };
    let mut scheduler = Scheduler::new(
        client,
        config.metrics.clone(),
        thresholds,
        notifier,
        Duration::from_secs(config.poll_interval_secs),
    );

    let http_port = config.http_port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(http_port).await {
            tracing::error!(error = %e, "Health endpoint failed");
        }
    });

    tokio::select! {
        _ = scheduler.run() => {}
        _ = signal::ctrl_c() => {
            tracing::info!("Shutting down gracefully");
        }
    }

    Ok(())
}
