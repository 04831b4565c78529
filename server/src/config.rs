use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Development host for the RideShare frontend.
#[derive(Parser, Debug, Clone)]
#[command(name = "rideshare-dev-host")]
#[command(about = "Serves the frontend bundle and forwards /api to the REST backend", long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "RIDESHARE_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Base URL of the REST backend; `/api/...` is appended as is.
    #[arg(long, env = "RIDESHARE_BACKEND", default_value = "http://localhost:8080")]
    pub backend: String,

    /// Directory holding the built frontend (`trunk build` output).
    #[arg(long, env = "RIDESHARE_DIST", default_value = "frontend/dist")]
    pub dist: PathBuf,

    #[arg(long, default_value = "server/log")]
    pub log_dir: PathBuf,
}
