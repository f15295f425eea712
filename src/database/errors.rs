// ABOUTME: Structured error types for database operations
// ABOUTME: Captures the engine message and constraint kind of every storage failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use thiserror::Error;

/// Which storage constraint rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Duplicate value in a `UNIQUE` column
    Unique,
    /// `CHECK` expression evaluated false
    Check,
    /// `NULL` written to a `NOT NULL` column
    NotNull,
    /// Reference to a row that does not exist
    ForeignKey,
}

impl ConstraintKind {
    /// Map the driver's structured error kind, falling back to the engine's
    /// message text when the driver reports no specific kind
    fn detect(kind: &sqlx::error::ErrorKind, message: &str) -> Option<Self> {
        use sqlx::error::ErrorKind;

        match kind {
            ErrorKind::UniqueViolation => Some(Self::Unique),
            ErrorKind::CheckViolation => Some(Self::Check),
            ErrorKind::NotNullViolation => Some(Self::NotNull),
            ErrorKind::ForeignKeyViolation => Some(Self::ForeignKey),
            _ if message.contains("UNIQUE constraint failed") => Some(Self::Unique),
            _ if message.contains("CHECK constraint failed") => Some(Self::Check),
            _ if message.contains("NOT NULL constraint failed") => Some(Self::NotNull),
            _ if message.contains("FOREIGN KEY constraint failed") => Some(Self::ForeignKey),
            _ => None,
        }
    }
}

/// Storage failure. Every variant keeps the underlying engine message.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The store could not be opened
    #[error("Failed to open database {url}: {context}")]
    ConnectionFailed {
        /// Connection string that failed
        url: String,
        /// Engine message
        context: String,
    },

    /// The data directory could not be created
    #[error("Failed to create data directory {}: {source}", .path.display())]
    DataDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Schema creation failed
    #[error("Schema migration failed: {context}")]
    MigrationFailed {
        /// Engine message
        context: String,
    },

    /// A write was rejected by a schema constraint
    #[error("{context}")]
    ConstraintViolation {
        /// Which constraint fired
        kind: ConstraintKind,
        /// Engine message
        context: String,
    },

    /// Any other statement failure: malformed SQL, I/O, closed pool
    #[error("Query failed: {context}")]
    QueryError {
        /// Engine message
        context: String,
    },
}

impl DatabaseError {
    /// The engine message carried by this error
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ConnectionFailed { context, .. }
            | Self::MigrationFailed { context }
            | Self::ConstraintViolation { context, .. }
            | Self::QueryError { context } => context.clone(),
            Self::DataDirectory { source, .. } => source.to_string(),
        }
    }

    /// Constraint that rejected the write, if any
    #[must_use]
    pub const fn constraint(&self) -> Option<ConstraintKind> {
        match self {
            Self::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error) => {
                let context = db_error.message().to_owned();
                match ConstraintKind::detect(&db_error.kind(), &context) {
                    Some(kind) => Self::ConstraintViolation { kind, context },
                    None => Self::QueryError { context },
                }
            }
            _ => Self::QueryError {
                context: error.to_string(),
            },
        }
    }
}
