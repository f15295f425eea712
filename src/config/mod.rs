// ABOUTME: Configuration management module for server settings
// ABOUTME: Groups runtime environment, database location and server config loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Database location and path selection
pub mod database;
/// Environment and server configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::ServerConfig;
pub use types::Environment;
