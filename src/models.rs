// ABOUTME: Domain data models for users and logged exercises
// ABOUTME: Row types shared by the data access layer, services and HTTP responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Users are immutable once created. Exercises always belong to an existing
//! user and carry their date as an ISO `YYYY-MM-DD` string.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// System-assigned id, strictly increasing
    pub id: i64,
    /// Unique, non-empty username
    pub username: String,
}

/// A stored exercise row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    /// System-assigned id
    pub id: i64,
    /// Owner of the exercise
    pub user_id: i64,
    /// What was done
    pub description: String,
    /// Duration in minutes, always positive
    pub duration: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// A validated exercise ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    /// Owner of the exercise
    pub user_id: i64,
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

impl NewExercise {
    /// Attach the generated id
    #[must_use]
    pub fn into_exercise(self, id: i64) -> Exercise {
        Exercise {
            id,
            user_id: self.user_id,
            description: self.description,
            duration: self.duration,
            date: self.date,
        }
    }
}

/// One line of an exercise log: the exercise without its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ExerciseLogEntry {
    /// Exercise id
    pub id: i64,
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// Filtered exercise log for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Number of exercises matching the date filters, ignoring any limit
    pub count: i64,
    /// Matching exercises ordered by date, truncated to the limit
    pub entries: Vec<ExerciseLogEntry>,
}

/// Raw exercise-log filters as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExerciseLogFilter {
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Maximum number of entries
    pub limit: Option<String>,
}

impl ExerciseLogFilter {
    /// Set the lower date bound
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the upper date bound
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the row limit
    #[must_use]
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}

/// Raw exercise fields as received from the caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExerciseInput {
    /// What was done
    pub description: Option<String>,
    /// Duration in minutes, unparsed
    pub duration: Option<String>,
    /// Calendar date, unparsed; defaults to today when absent
    pub date: Option<String>,
}
