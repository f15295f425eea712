// ABOUTME: Environment-based server configuration loading
// ABOUTME: Reads port, bind address, runtime mode and data directory from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration. There is no config file; every setting
//! comes from an environment variable with a default.

use super::database::DatabaseConfig;
use super::types::Environment;
use crate::constants::{defaults, env_vars};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// HTTP bind address
    pub host: String,
    /// Runtime mode
    pub environment: Environment,
    /// Directory holding the storage files, created on demand
    pub data_dir: PathBuf,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Comma-separated CORS origins, `*` for any
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but is not a valid port number
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {value}", env_vars::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let environment = env::var(env_vars::ENVIRONMENT)
            .or_else(|_| env::var(env_vars::NODE_ENV))
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let data_dir = PathBuf::from(env_var_or(env_vars::DATA_DIR, defaults::DATA_DIR));

        Ok(Self {
            http_port,
            host: env_var_or(env_vars::HOST, defaults::HOST),
            environment,
            database: DatabaseConfig::from_env(environment, &data_dir),
            data_dir,
            cors_allowed_origins: env_var_or(
                env_vars::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            ),
        })
    }

    /// Default settings around an explicit database, without reading the
    /// environment
    #[must_use]
    pub fn with_database(database: DatabaseConfig) -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            data_dir: PathBuf::from(defaults::DATA_DIR),
            database,
            cors_allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }

    /// Replace the data directory and re-derive the storage path from it
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.database = DatabaseConfig::from_env(self.environment, &data_dir);
        self.data_dir = data_dir;
        self
    }

    /// Address to bind the HTTP listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Exercise Tracker Configuration:\n\
             - HTTP: {}\n\
             - Environment: {}\n\
             - Data Directory: {}\n\
             - Database: {}",
            self.bind_address(),
            self.environment,
            self.data_dir.display(),
            self.database.url,
        )
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
