// ABOUTME: Database configuration types for the SQLite storage file
// ABOUTME: Selects the storage path from the runtime environment and data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::types::Environment;
use crate::constants::{defaults, env_vars};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string. Anything without the `sqlite:` prefix is taken as a
    /// file path.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:")).unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Storage file for the given mode inside `data_dir`
    #[must_use]
    pub fn for_environment(environment: Environment, data_dir: &Path) -> Self {
        let file = if environment.is_testing() {
            defaults::TEST_DATABASE_FILE
        } else {
            defaults::DATABASE_FILE
        };
        Self::SQLite {
            path: data_dir.join(file),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// File path, if the database lives on disk
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::SQLite { path } => Some(path),
            Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::for_environment(Environment::Development, Path::new(defaults::DATA_DIR))
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Where the store lives
    pub url: DatabaseUrl,
}

impl DatabaseConfig {
    /// Configuration for a store at an explicit location
    #[must_use]
    pub const fn new(url: DatabaseUrl) -> Self {
        Self { url }
    }

    /// Configuration for an in-memory store
    #[must_use]
    pub const fn in_memory() -> Self {
        Self::new(DatabaseUrl::Memory)
    }

    /// Load database configuration from environment.
    ///
    /// `DATABASE_URL` wins when set; otherwise the path is derived from the
    /// runtime mode and `data_dir`.
    #[must_use]
    pub fn from_env(environment: Environment, data_dir: &Path) -> Self {
        let url = env::var(env_vars::DATABASE_URL)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || DatabaseUrl::for_environment(environment, data_dir),
                |value| DatabaseUrl::parse_url(&value),
            );
        Self { url }
    }
}
