//! HTTP server for the HS site engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - `GET /api/health` for liveness checks
//! - `GET /api/pages/{owner_type}/{owner_id}` returning an owner's rendered
//!   sections split into header and body fragments
//!
//! # Quick Start
//!
//! ```ignore
//! use hs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8080,
//!         database_url: "sqlite://site.db".to_string(),
//!         settings: Default::default(),
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (hs-server)
//!                        │
//!                        └─► API routes (Rust handlers)
//!                                │
//!                                ├─► SqliteSectionStore (read-only)
//!                                └─► compose + render (hs-site, hs-renderer)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use hs_renderer::{IconSet, RenderContext, StaticSettings};
use hs_sections::SqliteSectionStore;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// `SQLite` database URL.
    pub database_url: String,
    /// Site-wide settings defaults; database values are layered on top.
    pub settings: HashMap<String, String>,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            database_url: "sqlite://site.db".to_owned(),
            settings: HashMap::new(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// Connects to the section database, layers the stored settings over the
/// configured defaults and serves the API until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the database connection or server startup fails.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteSectionStore::connect(&config.database_url).await?;

    let settings = StaticSettings::from_map(config.settings.clone())
        .overlay(store.load_settings().await);
    let ctx = RenderContext::new(Arc::new(settings), Arc::new(IconSet::new()));

    let state = Arc::new(AppState {
        store,
        ctx,
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from HS config.
#[must_use]
pub fn server_config_from_config(config: &hs_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        database_url: config.database.url.clone(),
        settings: config.settings.clone(),
        version,
    }
}
