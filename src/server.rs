//! HTTP Server and Polling Loop
//!
//! This module implements the Prometheus exporter HTTP server and the
//! inventory polling loop.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing `/metrics`, `/health`, and `/` endpoints
//! - **Polling Loop**: Background task that periodically fetches the PDQ Connect
//!   device inventory and republishes metrics
//! - **State Management**: Shared state (config, metrics, client) using Arc for thread-safety
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Health check (returns 200 if the last poll succeeded, 503 otherwise)
//!
//! # Polling
//!
//! The loop runs every N seconds (configured via `poll_interval_seconds`) and:
//! 1. Fetches the full paginated device list from PDQ Connect
//! 2. Clears stale device series and republishes the configured metric families
//! 3. Sets `pdq_up` to 1 on success, 0 on failure
//!
//! # Error Handling
//!
//! A failed fetch is logged and swallowed; nothing is republished that cycle
//! and the loop waits for the next tick. The server keeps serving the metrics
//! from the last successful poll.

use crate::collectors::{self, CollectionContext};
use crate::config::Config;
use crate::metrics::MetricsCollector;
use crate::pdq::PdqClient;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{error, info};

#[derive(Clone)]
struct AppState {
    config: Config,
    metrics: MetricsCollector,
    client: Arc<PdqClient>,
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let metrics = MetricsCollector::new()?;
    let client = Arc::new(PdqClient::new(config.pdq.clone())?);

    let state = AppState {
        config: config.clone(),
        metrics: metrics.clone(),
        client: client.clone(),
    };

    // Start background inventory polling
    let poll_state = state.clone();
    tokio::spawn(async move {
        poll_loop(poll_state).await;
    });

    // Build the router
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn poll_loop(state: AppState) {
    let mut ticker = interval(Duration::from_secs(
        state.config.metrics.poll_interval_seconds,
    ));

    loop {
        ticker.tick().await;

        if let Err(e) = poll_inventory(&state).await {
            error!("Failed to collect device metrics: {}", e);
            state.metrics.up.set(0.0);
        } else {
            state.metrics.up.set(1.0);
        }
    }
}

async fn poll_inventory(state: &AppState) -> anyhow::Result<()> {
    info!("Collecting device inventory from PDQ Connect");

    let devices = state.client.query_devices().await?;

    let ctx = CollectionContext {
        metrics: &state.metrics,
        config: &state.config.metrics,
    };
    collectors::publish_device_metrics(&ctx, &devices);

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    r#"<html>
<head><title>PDQ Connect Exporter</title></head>
<body>
<h1>PDQ Connect Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(metrics) => metrics.into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let up_value = state.metrics.up.get();

    if up_value > 0.0 {
        (axum::http::StatusCode::OK, "OK")
    } else {
        (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            "PDQ Connect API unreachable",
        )
    }
}
