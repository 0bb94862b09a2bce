//! eligible-offers server entry point.
//!
//! Starts the Axum HTTP server over in-memory stores.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use eligible_offers::api;
use eligible_offers::app_state::AppState;
use eligible_offers::config::{LogFormat, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(
        addr = %config.listen_addr,
        timeout_secs = config.request_timeout.as_secs(),
        "starting eligible-offers"
    );

    // Build application state and router
    let app = api::build_app(AppState::in_memory(), config.request_timeout);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
