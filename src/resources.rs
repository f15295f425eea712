// ABOUTME: Shared resource container handed to every route handler
// ABOUTME: Holds the open database handle and the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once by the process entry point and shared as `Arc<ServerResources>`
//! axum state. Handlers never open their own storage handle.

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Resources shared by all request handlers
#[derive(Clone, Debug)]
pub struct ServerResources {
    /// Open storage handle
    pub database: Database,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle an open database with the configuration it was opened from
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }

    /// Wrap for use as router state
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
