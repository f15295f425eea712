// ABOUTME: Application constants grouped by domain
// ABOUTME: Caller-facing messages, environment variable names and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Messages in [`error_messages`] are part of the public API: callers match
//! on them, so they must not change wording.

/// Caller-facing error and status messages
pub mod error_messages {
    /// Duplicate username on user creation
    pub const USERNAME_TAKEN: &str = "Username already exists.";
    /// Empty username rejected by the storage check constraint
    pub const USERNAME_EMPTY: &str = "Username cannot be empty.";
    /// Any other failure while creating a user
    pub const USER_CREATE_FAILED: &str = "Failed to create user.";

    /// Storage failure while listing users
    pub const USERS_RETRIEVE_FAILED: &str = "Failed to retrieve users.";
    /// Storage failure while loading a single user
    pub const USER_RETRIEVE_FAILED: &str = "Failed to retrieve user.";
    /// Storage failure while inserting an exercise
    pub const EXERCISE_CREATE_FAILED: &str = "Failed to add exercise.";
    /// Storage failure while reading an exercise log
    pub const EXERCISE_LOG_FAILED: &str = "Failed to retrieve exercise log.";
    /// Storage failure inside the user-existence check
    pub const INTERNAL_SERVER_ERROR: &str = "Internal server error.";

    /// Empty user table
    pub const NO_USERS_FOUND: &str = "No users found.";
    /// Successful user creation
    pub const USER_CREATED: &str = "User created successfully.";

    /// Build the not-found message for a user id
    #[must_use]
    pub fn user_not_found(id: i64) -> String {
        format!("User with ID {id} not found.")
    }
}

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HOST: &str = "HOST";
    /// Runtime mode, preferred name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Runtime mode, fallback name
    pub const NODE_ENV: &str = "NODE_ENV";
    /// Directory holding the storage files
    pub const DATA_DIR: &str = "DATA_DIR";
    /// Explicit storage URL, overrides the mode-derived path
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default values
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 3000;
    /// Default HTTP bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default data directory, relative to the working directory
    pub const DATA_DIR: &str = "data";
    /// Storage file used outside of test mode
    pub const DATABASE_FILE: &str = "db.db";
    /// Storage file used in test mode
    pub const TEST_DATABASE_FILE: &str = "test.db";
    /// Allow any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Service identification for logs
pub mod service_names {
    /// Name reported in startup logs
    pub const EXERCISE_TRACKER: &str = "exercise-tracker";
}
