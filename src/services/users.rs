// ABOUTME: User business logic shared by the HTTP handlers
// ABOUTME: Listing, creation with constraint classification, and id-based lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error_classifier::classify_user_creation_error;
use crate::constants::error_messages;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::validation::{parse_user_id, validate_username};
use tracing::{info, warn};

/// List every user in id order
///
/// # Errors
///
/// Returns `NotFound` when no users exist, or a database error on storage failure
pub async fn list_users(database: &Database) -> AppResult<Vec<User>> {
    let users = database
        .list_users()
        .await
        .map_err(|e| AppError::database(error_messages::USERS_RETRIEVE_FAILED, e))?;

    if users.is_empty() {
        return Err(AppError::not_found(error_messages::NO_USERS_FOUND));
    }
    Ok(users)
}

/// Create a user.
///
/// Only absence is checked here; an empty username reaches storage and is
/// rejected by the schema's non-empty check.
///
/// # Errors
///
/// Returns:
/// - `InvalidInput` "Username is required." when `username` is absent
/// - The classified storage failure otherwise (409, 400 or 500)
pub async fn create_user(database: &Database, username: Option<&str>) -> AppResult<User> {
    let username = validate_username(username)?;

    let user = database.create_user(username).await.map_err(|e| {
        warn!(error = %e, "User creation rejected");
        classify_user_creation_error(e)
    })?;

    info!(user.id = user.id, user.username = %user.username, "User created");
    Ok(user)
}

/// Load a user by its raw path id
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed id, `NotFound` when the user does
/// not exist, or a database error on storage failure
pub async fn get_user_by_id(database: &Database, raw_id: &str) -> AppResult<User> {
    let id = parse_user_id(raw_id)?;

    database
        .get_user(id)
        .await
        .map_err(|e| AppError::database(error_messages::USER_RETRIEVE_FAILED, e))?
        .ok_or_else(|| AppError::not_found(error_messages::user_not_found(id)))
}

/// Existence check run before any per-user operation.
///
/// Same outcomes as [`get_user_by_id`] except that a storage failure reports
/// the generic internal-error message.
///
/// # Errors
///
/// Returns `InvalidInput`, `NotFound`, or a database error
pub async fn resolve_user(database: &Database, raw_id: &str) -> AppResult<User> {
    let id = parse_user_id(raw_id)?;

    match database.get_user(id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(AppError::not_found(error_messages::user_not_found(id))),
        Err(e) => Err(AppError::database(error_messages::INTERNAL_SERVER_ERROR, e)),
    }
}
