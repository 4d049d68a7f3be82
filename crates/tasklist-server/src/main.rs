//! Entry point for the Tasklist API server.
//!
//! Wires the pieces together: one empty item store is constructed at
//! startup, injected into the HTTP layer, and served until the process
//! is terminated. All state lives in memory and is discarded on exit.

mod config;

use std::sync::Arc;

use tasklist_api::server::serve;
use tasklist_api::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerSettings;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// constructs the application state, and runs the HTTP server until
/// termination.
///
/// # Errors
///
/// Returns an error if the settings are malformed or the server fails
/// to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("tasklist-server starting");

    // Load configuration from environment
    let settings = ServerSettings::from_env()?;
    let addr = settings.bind_addr()?;
    info!(%addr, "configuration loaded");

    // The process's single store: created empty here, dropped on exit.
    let state = Arc::new(AppState::new());

    serve(addr, state).await?;

    Ok(())
}
