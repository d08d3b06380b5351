//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, counter service wiring, and Axum server
//! lifecycle.

use crate::application::counter_service::{CounterService, RetryPolicy};
use crate::config::Config;
use crate::infrastructure::store::RedisCounterStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis counter store (PING-validated)
/// - Counter service with the configured retry policy
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The store connection cannot be established at boot
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = RedisCounterStore::connect(&config.redis_url, config.socket_timeout()).await?;
    tracing::info!("Counter store ready");

    let policy = RetryPolicy {
        attempts: config.retry_attempts,
        delay: Duration::from_millis(config.retry_delay_ms),
    };

    let counters = Arc::new(CounterService::new(Arc::new(store), policy));
    let state = AppState { counters };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
