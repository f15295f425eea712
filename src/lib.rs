// ABOUTME: Main library entry point for the exercise tracker service
// ABOUTME: Users log timed exercises and query date-filtered exercise logs over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Exercise Tracker
//!
//! A small HTTP service backed by `SQLite`. Users are created once; each user
//! logs exercises (description, duration in minutes, date) and reads them
//! back as a log filtered by date range and limit.
//!
//! ## Architecture
//!
//! - **Validation**: pure input checks for dates, durations, limits and ids
//! - **Database**: pool, schema, query primitives and the exercise-log query builder
//! - **Services**: business rules, including storage error classification
//! - **Routes**: thin axum handlers over the services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use exercise_tracker::config::DatabaseConfig;
//! use exercise_tracker::database::DatabaseLifecycle;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let lifecycle = DatabaseLifecycle::new(DatabaseConfig::in_memory());
//!     let database = lifecycle.connect().await?;
//!
//!     let user = database.create_user("alice").await?;
//!     println!("Created user {} with id {}", user.username, user.id);
//!
//!     lifecycle.close().await;
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and caller-facing messages
pub mod constants;

/// `SQLite` data access layer
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain data models
pub mod models;

/// Shared resources for request handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// Domain services
pub mod services;

/// Input validation
pub mod validation;
