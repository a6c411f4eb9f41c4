//! Route Cache - Interaction-to-route mapping service
//!
//! Hosts the route cache behind a small HTTP API for tracing instrumentation.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_cache::api::create_router;
use route_cache::{spawn_eviction_task, AppState, Config};

/// Main entry point for the route cache service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the route cache with the configured capacity
/// 4. Start the background staleness sweep
/// 5. Serve the HTTP API until SIGINT/SIGTERM
/// 6. Abort the sweep and clear the cache on shutdown
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Route Cache service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_entries={}, max_age_ms={}, eviction_interval_ms={}, port={}",
        config.max_entries, config.max_age_ms, config.eviction_interval_ms, config.server_port
    );

    let state = AppState::from_config(&config);
    let cache = state.cache.clone();

    let sweep_handle =
        spawn_eviction_task(cache.clone(), config.eviction_interval_ms, config.max_age_ms);
    info!("Background staleness sweep started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    sweep_handle.abort();
    warn!("Staleness sweep aborted");

    // Session ends with the process; nothing is persisted
    cache.write().await.clear();
    info!("Route cache cleared, shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
