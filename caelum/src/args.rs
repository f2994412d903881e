use std::path::PathBuf;

use clap::Parser;

/// Caelum assistant gateway
#[derive(Debug, Parser)]
#[command(name = "caelum", about = "Voice-enabled assistant gateway for chat, speech, and messaging")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "caelum.toml", env = "CAELUM_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CAELUM_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter (tracing env-filter syntax)
    #[arg(long, default_value = "info", env = "CAELUM_LOG")]
    pub log: String,
}
