// ABOUTME: Exercise business logic shared by the HTTP handlers
// ABOUTME: Validates and stores exercises, and reads filtered exercise logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::error_messages;
use crate::database::{build_exercise_log_query, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseInput, ExerciseLog, ExerciseLogFilter, User};
use crate::validation::validate_exercise_input;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Validate and store an exercise for an existing user. A missing date
/// becomes `today`.
///
/// # Errors
///
/// Returns `InvalidInput` for the first failing field (description, then
/// duration, then date), or a database error on storage failure
pub async fn add_exercise(
    database: &Database,
    user: &User,
    input: &ExerciseInput,
    today: NaiveDate,
) -> AppResult<Exercise> {
    let exercise = validate_exercise_input(user.id, input, today)?;

    let stored = database
        .add_exercise(&exercise)
        .await
        .map_err(|e| AppError::database(error_messages::EXERCISE_CREATE_FAILED, e))?;

    info!(
        exercise.id = stored.id,
        user.id = user.id,
        exercise.date = %stored.date,
        "Exercise added"
    );
    Ok(stored)
}

/// Read the filtered exercise log for an existing user
///
/// # Errors
///
/// Returns `InvalidInput` for a rejected filter before any storage access, or
/// a database error on storage failure
pub async fn get_exercise_log(
    database: &Database,
    user: &User,
    filter: &ExerciseLogFilter,
) -> AppResult<ExerciseLog> {
    let query = build_exercise_log_query(user.id, filter)?;
    debug!(user.id = user.id, sql = %query.rows.text, "Reading exercise log");

    database
        .get_exercise_log(&query)
        .await
        .map_err(|e| AppError::database(error_messages::EXERCISE_LOG_FAILED, e))
}
