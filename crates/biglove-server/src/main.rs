//! # biglove-server
//!
//! Demo REST API for the Big Love Forum.
//!
//! Serves users, forums, posts and comments from an in-memory store seeded
//! at startup, plus post creation, commenting, voting and emoji reactions.
//! All state is lost when the process exits.

mod api;
mod config;
mod error;

use biglove_store::{Fixture, ForumStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,biglove_server=debug")),
        )
        .init();

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");
    info!(
        "Starting {} demo API v{}",
        config.instance_name,
        env!("CARGO_PKG_VERSION")
    );

    // -----------------------------------------------------------------------
    // 3. Seed the store
    // -----------------------------------------------------------------------
    let fixture = match &config.fixture_path {
        Some(path) => Fixture::from_path(path)?,
        None => Fixture::builtin()?,
    };
    let store = ForumStore::seeded(fixture);
    let counts = store.counts();
    info!(
        users = counts.users,
        forums = counts.forums,
        posts = counts.posts,
        comments = counts.comments,
        "Demo data loaded"
    );

    let app_state = AppState::new(store);

    // -----------------------------------------------------------------------
    // 4. Run the HTTP API server until it fails or Ctrl+C arrives
    // -----------------------------------------------------------------------
    let http_addr = config.http_addr;
    info!(
        "API base URL: http://localhost:{}/api (try GET /api/health)",
        http_addr.port()
    );

    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
