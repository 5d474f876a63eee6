//! KWS server entry point.
//!
//! Opens the storage backend, seeds the admin store, and starts the Axum
//! HTTP server with graceful shutdown. A background session sweeper runs
//! alongside the server and is cancelled on shutdown.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use kws_core::auth::AdminGate;
use kws_core::store::AdminStore;
use kws_storage::{FileBackend, MemoryBackend, StorageBackend};

use kws_server::config::{ServerConfig, StorageBackendType};
use kws_server::routes;
use kws_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(storage = ?config.storage_backend, "KWS server starting");

    let state = build_app_state(&config).await?;

    // Shutdown signal channel.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper_handle = {
        let gate = Arc::clone(&state.gate);
        let mut rx = shutdown_rx.clone();
        let interval_secs = config.session_sweep_secs;
        tokio::spawn(async move {
            session_sweeper(gate, &mut rx, interval_secs).await;
        })
    };

    let app = routes::build_router(Arc::clone(&state));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "KWS server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .context("server error")?;

    info!("waiting for background workers to stop");
    let _ = tokio::time::timeout(Duration::from_secs(10), sweeper_handle).await;

    info!("KWS server stopped");
    Ok(())
}

/// Open storage and build the shared application state.
async fn build_app_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let storage: Arc<dyn StorageBackend> = match &config.storage_backend {
        StorageBackendType::Memory => {
            info!("using in-memory storage (submissions will not persist)");
            Arc::new(MemoryBackend::new())
        }
        StorageBackendType::File { path } => {
            info!(path = %path, "using file storage");
            Arc::new(
                FileBackend::open(path)
                    .await
                    .context("failed to open file storage")?,
            )
        }
    };

    let store = Arc::new(AdminStore::seeded(storage).await);

    if config.uses_default_password() {
        warn!("admin password is the built-in default; set KWS_ADMIN_PASSWORD");
    }
    let ttl_secs = i64::try_from(config.session_ttl_secs).unwrap_or(i64::MAX);
    let gate = Arc::new(AdminGate::new(
        &config.admin_password,
        chrono::Duration::try_seconds(ttl_secs).unwrap_or(chrono::Duration::MAX),
    ));

    Ok(Arc::new(AppState::new(store, gate)))
}

/// Background worker that periodically drops expired admin sessions.
async fn session_sweeper(
    gate: Arc<AdminGate>,
    shutdown: &mut watch::Receiver<bool>,
    interval_secs: u64,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    info!(interval_secs, "session sweeper started");

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let purged = gate.purge_expired().await;
                if purged > 0 {
                    info!(purged, "expired admin sessions dropped");
                } else {
                    debug!("session sweep found nothing to drop");
                }
            }
            _ = shutdown.changed() => {
                info!("session sweeper shutting down");
                return;
            }
        }
    }
}

/// Wait for SIGINT or SIGTERM, then broadcast shutdown.
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
    let _ = shutdown_tx.send(true);
}
