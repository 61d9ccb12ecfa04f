//! Server configuration

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Tagveil settings server configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tagveil-server",
    about = "Administrative settings server for the Tagveil post-visibility overlay"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TAGVEIL_LISTEN", default_value = "127.0.0.1:8090")]
    pub listen: SocketAddr,

    /// Path of the JSON settings file; settings stay in memory when unset
    #[arg(long, env = "TAGVEIL_SETTINGS_PATH")]
    pub settings_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8090)),
            settings_path: None,
        }
    }
}
