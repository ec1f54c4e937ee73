//! Page Cache - A small HTTP file server with an in-memory LRU page cache

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use page_cache::{create_router, AppState, Config};

/// Main entry point for the page cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the page cache (fails fast on a zero capacity)
/// 4. Create Axum router with all routes
/// 5. Start HTTP server on configured port
/// 6. On SIGINT/SIGTERM, stop serving and destroy the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "page_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting page cache server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, cache_index_size={}, port={}, root={}, files={}",
        config.cache_capacity,
        config.cache_index_size,
        config.server_port,
        config.server_root.display(),
        config.server_files.display()
    );

    let state = AppState::from_config(&config).context("failed to create page cache")?;
    let cache = state.cache.clone();
    info!("Page cache initialized");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Waiting for connections on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let (released, stats) = match Arc::try_unwrap(cache) {
        Ok(store) => {
            let store = store.into_inner();
            let stats = store.stats();
            (store.destroy(), stats)
        }
        Err(shared) => {
            let mut store = shared.lock().await;
            let stats = store.stats();
            (store.clear(), stats)
        }
    };
    info!(
        released,
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        hit_rate = stats.hit_rate(),
        "Page cache destroyed"
    );

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
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
