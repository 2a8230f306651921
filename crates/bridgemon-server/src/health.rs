use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;

/// Builds the health-check router. The responder shares no mutable state
/// with the evaluation cycle, so it needs no locking against it.
pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

/// Serves the health endpoint until the process exits.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Health endpoint listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
