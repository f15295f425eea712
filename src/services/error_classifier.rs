// ABOUTME: Maps storage failures on user creation to caller-facing outcomes
// ABOUTME: Ordered rules, first match wins, the last rule always matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User-creation error classification.
//!
//! Each rule checks the structured constraint kind first and the engine
//! message second, so a driver that reports only text still classifies the
//! same way.

use crate::constants::error_messages;
use crate::database::{ConstraintKind, DatabaseError};
use crate::errors::{AppError, ErrorCode};

/// Rules before the catch-all: constraint kind, engine message marker, verdict
const RULES: [(ConstraintKind, &str, UserCreationFailure); 2] = [
    (
        ConstraintKind::Unique,
        "UNIQUE constraint failed",
        UserCreationFailure::UsernameTaken,
    ),
    (
        ConstraintKind::Check,
        "CHECK constraint failed",
        UserCreationFailure::UsernameEmpty,
    ),
];

/// Verdict for a failed user insert, in rule order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCreationFailure {
    /// Uniqueness violation on the username
    UsernameTaken,
    /// Empty-username guard rejected the write
    UsernameEmpty,
    /// Anything else
    Failed,
}

impl UserCreationFailure {
    /// Classify a storage error. Never fails: [`Self::Failed`] is the catch-all.
    #[must_use]
    pub fn classify(error: &DatabaseError) -> Self {
        let message = error.message();
        let constraint = error.constraint();

        RULES
            .iter()
            .find(|(kind, marker, _)| constraint == Some(*kind) || message.contains(marker))
            .map_or(Self::Failed, |(_, _, verdict)| *verdict)
    }

    /// Domain error code for this verdict
    #[must_use]
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::UsernameTaken => ErrorCode::ResourceAlreadyExists,
            Self::UsernameEmpty => ErrorCode::InvalidInput,
            Self::Failed => ErrorCode::DatabaseError,
        }
    }

    /// HTTP status for this verdict
    #[must_use]
    pub const fn status_code(self) -> u16 {
        self.code().http_status()
    }

    /// Caller-facing message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UsernameTaken => error_messages::USERNAME_TAKEN,
            Self::UsernameEmpty => error_messages::USERNAME_EMPTY,
            Self::Failed => error_messages::USER_CREATE_FAILED,
        }
    }
}

/// Turn a user-insert failure into the error returned to the caller. The
/// storage error is kept as the source for server-side logging.
#[must_use]
pub fn classify_user_creation_error(error: DatabaseError) -> AppError {
    let verdict = UserCreationFailure::classify(&error);
    AppError::new(verdict.code(), verdict.message()).with_source(error)
}
