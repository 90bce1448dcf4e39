//! Command line and environment configuration for the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// The REST API and frontend server for the finance tracker.
///
/// Every option can also be set with the environment variable shown in `--help`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The address to listen on.
    #[arg(long, env = "FINANCE_TRACKER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// The port to serve the API and frontend from.
    #[arg(short, long, env = "FINANCE_TRACKER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// The directory containing the built frontend, i.e. `index.html`.
    #[arg(long, env = "FINANCE_TRACKER_ASSET_DIR", default_value = "frontend/dist")]
    pub asset_dir: PathBuf,

    /// Also write debug logs to this file.
    #[arg(long, env = "FINANCE_TRACKER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The socket address the server should bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
