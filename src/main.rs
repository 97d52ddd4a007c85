//! game-saver: serves the love.js player, the packaged game and the save API.

use std::path::PathBuf;

use clap::Parser;
use game_saver::{ServerConfig, server};
use tracing_subscriber::EnvFilter;

/// Command line interface for the game server
#[derive(Parser, Debug)]
#[command(name = "game-saver")]
#[command(about = "Serve a love.js game with a JSON save/load API")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding configuration and environment
    #[arg(short, long)]
    pub port: Option<u16>,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    init_tracing(&config.log_filter);
    tracing::debug!(?config, "Configuration loaded");

    server::launch(config).await?;
    Ok(())
}
