//! Demo backend serving the kanban JSON API from in-memory storage.
//!
//! ```text
//! kanban-server [--config kanban.toml] [--listen 127.0.0.1:3001] [--empty]
//! ```
//!
//! Unless `--empty` is given the server starts with the demo accounts. All
//! data is lost when the process exits.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use kanban::{
    account::{adapters::memory::InMemoryUserRepository, services::demo_accounts},
    api::{self, AppState},
    board::adapters::memory::InMemoryTaskRepository,
    config::KanbanConfig,
    telemetry,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "kanban-server", version, about = "Kanban board JSON backend")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, default_value = "kanban.toml")]
    config: Utf8PathBuf,

    /// Socket address to bind, overriding the configuration file.
    #[arg(long)]
    listen: Option<String>,

    /// Start without the demo accounts.
    #[arg(long, default_value_t = false)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = KanbanConfig::load(&cli.config)?.with_env_overrides();
    telemetry::init(&config.log.filter);

    let accounts = if cli.empty {
        Vec::new()
    } else {
        demo_accounts().context("build demo accounts")?
    };
    info!(accounts = accounts.len(), "seeded user store");
    let state = AppState::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryUserRepository::with_accounts(accounts)),
    );

    let listen = cli.listen.unwrap_or(config.server.listen);
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid listen address {listen}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to listen for ctrl-c");
    }
    info!("shutdown requested");
}
