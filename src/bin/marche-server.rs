// ABOUTME: Server binary for the marche REST backend
// ABOUTME: Loads configuration, connects to MariaDB, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Marche Server Binary
//!
//! Starts the HTTP server over a MariaDB-backed store. Configuration comes
//! from the environment (`DATABASE_URL`, `HTTP_PORT`, `RUST_LOG`), with the
//! port overridable on the command line.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use marche_server::{
    config::ServerConfig,
    logging,
    repositories::Store,
    routes::{self, ServerResources},
};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "marche-server")]
#[command(about = "REST backend for a farm-produce catalogue")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database connection string
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting marche server");
    info!("{}", config.summary());

    let store = Store::mariadb(&config.database_url).await?;
    store.migrate().await?;
    info!("Store initialized: {}", store.backend_info());

    let resources = Arc::new(ServerResources::new(Arc::new(store)));
    let app = routes::router(resources);

    let listener = TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // Ctrl-C is the only shutdown trigger we care about.
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
    }
}
