//! HTTP transport for pxe-pilot
//!
//! | Route | Response |
//! |---|---|
//! | `POST /answer` | answer document for the installer's interfaces |
//! | `GET /health` | store summary |
//! | `GET /hosts` | configured override addresses |
//! | `GET /hosts/{mac}` | answer preview for one address |
//! | `GET /boot.ipxe` | chain stub loading the menu |
//! | `GET /menu.ipxe` | boot menu for the assets tree |
//!
//! Handlers hold no state between requests; every call re-reads storage.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use pilot_core::{DocumentStore, Resolver};
use tokio::net::TcpListener;
use tracing::{error, info};

pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use error::ApiError;
pub use handlers::SOURCE_HEADER;

/// Shared, immutable request context.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub resolver: Resolver,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let resolver = Resolver::new(DocumentStore::new(config.config_dir.clone()));
        Self { config, resolver }
    }
}

/// Build the router over a fresh state.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/answer", post(handlers::answer::answer))
        .route("/health", get(handlers::health::health))
        .route("/hosts", get(handlers::hosts::list_hosts))
        .route("/hosts/{mac}", get(handlers::hosts::preview_host))
        .route("/boot.ipxe", get(handlers::boot::boot_script))
        .route("/menu.ipxe", get(handlers::boot::menu_script))
        .with_state(Arc::new(AppState::new(config)))
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        config_dir = %config.config_dir.display(),
        assets_dir = %config.assets_dir.display(),
        strict = config.strict,
        "pxe-pilot listening"
    );

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
