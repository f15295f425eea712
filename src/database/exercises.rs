// ABOUTME: Exercise table schema and database operations
// ABOUTME: Inserts validated exercises and reads filtered, counted exercise logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, DatabaseResult, ExerciseLogQuery, SqlParam};
use crate::models::{Exercise, ExerciseLog, ExerciseLogEntry, NewExercise};

impl Database {
    /// Create the exercises table and its lookup index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Table creation fails
    /// - Index creation fails
    pub(super) async fn migrate_exercises(&self) -> DatabaseResult<()> {
        self.run_schema(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                description TEXT NOT NULL,
                duration INTEGER NOT NULL CHECK(duration > 0),
                date TEXT NOT NULL
            )
            ",
        )
        .await?;

        self.run_schema(
            "CREATE INDEX IF NOT EXISTS idx_exercises_user_date ON exercises(user_id, date)",
        )
        .await
    }

    /// Insert a validated exercise
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The owning user does not exist (`FOREIGN KEY` constraint)
    /// - Database operation fails
    pub async fn add_exercise(&self, exercise: &NewExercise) -> DatabaseResult<Exercise> {
        let id = self
            .execute(
                "INSERT INTO exercises (user_id, description, duration, date) VALUES (?, ?, ?, ?)",
                &[
                    exercise.user_id.into(),
                    SqlParam::from(exercise.description.as_str()),
                    exercise.duration.into(),
                    SqlParam::from(exercise.date.as_str()),
                ],
            )
            .await?;

        Ok(exercise.clone().into_exercise(id))
    }

    /// Get a single exercise by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_exercise(&self, id: i64) -> DatabaseResult<Option<Exercise>> {
        self.fetch_one(
            "SELECT id, user_id, description, duration, date FROM exercises WHERE id = ?",
            &[id.into()],
        )
        .await
    }

    /// Run a built exercise-log query: the total count, then the entry rows.
    ///
    /// The two reads are not isolated from each other, so a concurrent insert
    /// can make `count` and `entries` disagree.
    ///
    /// # Errors
    ///
    /// Returns an error if either read fails
    pub async fn get_exercise_log(&self, query: &ExerciseLogQuery) -> DatabaseResult<ExerciseLog> {
        let count = self
            .fetch_scalar(&query.count.text, &query.count.params)
            .await?;
        let entries: Vec<ExerciseLogEntry> = self
            .fetch_all(&query.rows.text, &query.rows.params)
            .await?;

        Ok(ExerciseLog { count, entries })
    }
}
