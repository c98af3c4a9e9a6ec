use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Imago image service
#[derive(Debug, Parser)]
#[command(name = "imago", about = "HTTP image processing service")]
pub struct Args {
    /// Path to configuration file, defaults are used when it does not exist
    #[arg(short, long, default_value = "imago.toml", env = "IMAGO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "IMAGO_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Override the log filter, e.g. `debug` or `info,imago_server=trace`
    #[arg(long, env = "IMAGO_LOG")]
    pub log: Option<String>,
}
