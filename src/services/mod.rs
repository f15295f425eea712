// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Turns validated input and storage results into caller-facing outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services take an explicit [`crate::database::Database`] handle and return
//! [`crate::errors::AppResult`]. Validation failures short-circuit before any
//! storage access; storage failures are logged with their cause and reported
//! with a generic message.

/// Storage failure classification for user creation
pub mod error_classifier;

/// Exercise creation and exercise-log reads
pub mod exercises;

/// User listing, creation and lookup
pub mod users;
