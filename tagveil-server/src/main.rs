//! Tagveil settings server CLI
//!
//! Run with: `cargo run -p tagveil-server -- --help`

use clap::Parser;
use std::sync::Arc;
use tagveil_server::{build_router, AppState, ServerConfig, SettingsStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match &config.settings_path {
        Some(path) => SettingsStore::open(path.clone()),
        None => SettingsStore::in_memory(),
    };
    let state = Arc::new(AppState::new(settings));

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen,
        settings_path = ?config.settings_path,
        "Starting Tagveil settings server"
    );

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
