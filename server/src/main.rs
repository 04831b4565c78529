use std::{fs::OpenOptions, net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use server::{config::Config, router, server_state::ServerState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    std::fs::create_dir_all(&config.log_dir).context("creating log directory")?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join("server.log"))
        .context("opening log file")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into())
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
        .init();

    tracing::info!("Starting dev host...");
    if !config.dist.join("index.html").exists() {
        tracing::warn!("{} has no index.html, run `trunk build` in frontend/ first", config.dist.display());
    }

    let state = Arc::new(ServerState::new(&config.backend));
    let app = router(state, &config.dist);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("Listening on http://{}, forwarding /api to {}", config.bind, config.backend);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
