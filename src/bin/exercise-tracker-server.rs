// ABOUTME: Server binary for the exercise tracker HTTP API
// ABOUTME: Owns the database lifecycle, serves requests and shuts down gracefully on Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Tracker Server Binary
//!
//! Loads configuration from the environment, opens the store, serves the
//! HTTP API and closes the store once the listener has drained.

use anyhow::{Context, Result};
use clap::Parser;
use exercise_tracker::{
    config::ServerConfig, database::DatabaseLifecycle, logging, resources::ServerResources,
    routes::app_router,
};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "exercise-tracker-server")]
#[command(about = "Exercise tracker - log exercises and query them by date")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the data directory holding the storage file
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config = config.with_data_dir(data_dir);
    }

    info!("{}", config.summary());

    let lifecycle = DatabaseLifecycle::new(config.database.clone());
    let database = lifecycle
        .connect()
        .await
        .context("Failed to open the exercise store")?;

    let bind_address = config.bind_address();
    let resources = ServerResources::new(database, config).into_shared();
    let app = app_router(resources);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!("Server listening on http://{bind_address}");
    display_available_endpoints(&bind_address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    lifecycle.close().await;

    if let Err(e) = served {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(address: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:        GET  http://{address}/health");
    info!("   List Users:    GET  http://{address}/api/users");
    info!("   Create User:   POST http://{address}/api/users");
    info!("   Get User:      GET  http://{address}/api/users/{{id}}");
    info!("   Add Exercise:  POST http://{address}/api/users/{{id}}/exercises");
    info!("   Exercise Log:  GET  http://{address}/api/users/{{id}}/logs?from&to&limit");
    info!("=== End of Endpoint List ===");
}
