//! HTTP server: router assembly, bind and graceful shutdown.

pub mod config;

use crate::api;
use anyhow::{Context, Result};
use config::AppConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Runs the HTTP server until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> Result<()> {
    let address = format!("{}:{}", config.server.host, config.server.port);

    let state = api::AppState {
        config: Arc::new(config),
    };
    let app = api::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!("suimei v{} listening on {address}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
