// Passvault - personal password vault
// Core library

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod store;
pub mod ui;
pub mod vault;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use config::VaultConfig;
use error::{VaultError, VaultResult};
use store::{CredentialStore, MemoryStore, MongoStore};
use vault::CredentialService;

pub type SharedState = Arc<AppState>;

/// State shared by every request handler
pub struct AppState {
    pub service: CredentialService,
}

impl AppState {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            service: CredentialService::new(store),
        }
    }

    pub fn shared(store: Arc<dyn CredentialStore>) -> SharedState {
        Arc::new(Self::new(store))
    }
}

/// Opens the store named by the configuration
///
/// A failed initial ping is logged, not fatal: requests will report storage
/// errors until the database becomes reachable.
pub async fn open_store(config: &VaultConfig, in_memory: bool) -> VaultResult<Arc<dyn CredentialStore>> {
    if in_memory {
        warn!("using in-memory store; records are lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = MongoStore::connect(&config.database_url, &config.database_name).await?;
    match store.ping().await {
        Ok(()) => info!(database = store.database_name(), "connected to MongoDB"),
        Err(e) => error!(error = %e, "error connecting to MongoDB"),
    }
    Ok(Arc::new(store))
}

/// Serves the REST API on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, state: SharedState) -> VaultResult<()> {
    let app = http::build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;
    Ok(())
}

pub async fn run_server(config: &VaultConfig, in_memory: bool) -> VaultResult<()> {
    let store = open_store(config, in_memory).await?;
    let state = AppState::shared(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| VaultError::config(format!("Cannot listen on {}: {}", addr, e)))?;
    info!(%addr, backend = state.service.backend_id(), "server is running");

    serve(listener, state).await
}

pub async fn run_ui(config: &VaultConfig) -> VaultResult<()> {
    if !config.has_master_password() {
        warn!("no master password configured; stored passwords cannot be revealed");
    }
    ui::terminal::run(ui::VaultSession::from_config(config)).await
}
