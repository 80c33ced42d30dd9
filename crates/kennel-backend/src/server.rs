//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::KennelConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::storage::InMemoryStorage;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Kennel registry server
pub struct Server {
    config: KennelConfig,
    storage: Arc<InMemoryStorage>,
}

impl Server {
    /// Create a new server with an empty registry
    pub fn new(config: KennelConfig) -> Self {
        Self {
            config,
            storage: Arc::new(InMemoryStorage::new()),
        }
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let listener = TcpListener::bind(addr).await.map_err(|source| {
            tracing::error!(%addr, error = %source, "Failed to bind listener");
            DaemonError::Bind { addr, source }
        })?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> DaemonResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let state = AppState::new(self.storage.clone());
        let app = create_router(state);

        let addr = listener.local_addr()?;
        tracing::info!(%addr, "kennel-backend listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("kennel-backend shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
