// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, isolated stores and ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `exercise_tracker`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use exercise_tracker::{
    config::{DatabaseConfig, DatabaseUrl, ServerConfig},
    database::{Database, DatabaseLifecycle},
    resources::ServerResources,
    routes::app_router,
};
use std::path::Path;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::connect(&DatabaseConfig::in_memory()).await?)
}

/// Lifecycle for a store file inside `dir`
pub fn file_lifecycle(dir: &Path, file: &str) -> DatabaseLifecycle {
    init_test_logging();
    DatabaseLifecycle::new(DatabaseConfig::new(DatabaseUrl::SQLite {
        path: dir.join(file),
    }))
}

/// Server resources around an in-memory store
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let config = ServerConfig::with_database(DatabaseConfig::new(database.url().clone()));
    Ok(ServerResources::new(database, config).into_shared())
}

/// Full application router around a fresh in-memory store
pub async fn create_test_app() -> Result<axum::Router> {
    Ok(app_router(create_test_resources().await?))
}
