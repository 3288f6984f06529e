//! HTTP server for exbox example pages.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Example pages with an embedded sandbox
//! - A JSON endpoint exposing the resolved example and its links
//! - The one-shot color scheme script used by example pages
//!
//! # Quick Start
//!
//! ```ignore
//! use exbox_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         repo: "tanstack/query".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (exbox-server)
//!                        │
//!                        ├─► /{library}/{version}/docs/{framework}/examples/{*path}
//!                        │       │
//!                        │       └─► ExampleReference ─► Branch ─► ExampleLinks ─► HTML
//!                        │
//!                        ├─► /api/examples/{version}/{*path} (JSON)
//!                        │
//!                        └─► /assets/color-scheme.js
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod preference;
mod state;
mod template;

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Repository identifier (`owner/name`).
    pub repo: String,
    /// Library slug used as route prefix and in titles.
    pub library: String,
    /// Site name appended to page titles.
    pub site_name: String,
    /// Latest documentation version.
    pub latest_version: String,
    /// Branch holding the latest version.
    pub latest_branch: String,
    /// Branches whose examples are not grouped by framework.
    pub legacy_branches: Vec<String>,
    /// Explicit version to branch overrides.
    pub branch_overrides: BTreeMap<String, String>,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            repo: "tanstack/query".to_owned(),
            library: "query".to_owned(),
            site_name: "TanStack Query Docs".to_owned(),
            latest_version: "v5".to_owned(),
            latest_branch: "main".to_owned(),
            legacy_branches: vec!["v3".to_owned()],
            branch_overrides: BTreeMap::new(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::from_config(&config));
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        repo = %config.repo,
        library = %config.library,
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from exbox config.
///
/// # Arguments
///
/// * `config` - exbox configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &exbox_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        repo: config.project.repo.clone(),
        library: config.project.library.clone(),
        site_name: config.project.site_name.clone(),
        latest_version: config.versions.latest.clone(),
        latest_branch: config.versions.latest_branch.clone(),
        legacy_branches: config.versions.legacy_branches.clone(),
        branch_overrides: config.versions.branches.clone(),
        verbose,
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = exbox_config::Config::default();
        config.server.port = 9000;
        config.project.repo = "acme/widgets".to_owned();
        config
            .versions
            .branches
            .insert("beta".to_owned(), "next".to_owned());

        let server = server_config_from_config(&config, "1.2.3".to_owned(), true);

        assert_eq!(server.port, 9000);
        assert_eq!(server.repo, "acme/widgets");
        assert_eq!(server.library, "query");
        assert_eq!(server.latest_branch, "main");
        assert_eq!(server.legacy_branches, vec!["v3".to_owned()]);
        assert_eq!(
            server.branch_overrides.get("beta").map(String::as_str),
            Some("next")
        );
        assert_eq!(server.version, "1.2.3");
        assert!(server.verbose);
    }
}
