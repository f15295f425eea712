// ABOUTME: User table schema and database operations
// ABOUTME: Handles user creation, lookup by id and listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Database, DatabaseResult, SqlParam};
use crate::models::User;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_users(&self) -> DatabaseResult<()> {
        self.run_schema(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE CHECK(trim(username) != '')
            )
            ",
        )
        .await
    }

    /// Insert a user and return it with its generated id
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The username is already taken (`UNIQUE` constraint)
    /// - The username is blank (`CHECK` constraint)
    /// - Database operation fails
    pub async fn create_user(&self, username: &str) -> DatabaseResult<User> {
        let id = self
            .execute(
                "INSERT INTO users (username) VALUES (?)",
                &[SqlParam::from(username)],
            )
            .await?;

        Ok(User {
            id,
            username: username.to_owned(),
        })
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, id: i64) -> DatabaseResult<Option<User>> {
        self.fetch_one("SELECT id, username FROM users WHERE id = ?", &[id.into()])
            .await
    }

    /// List every user in id order
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_users(&self) -> DatabaseResult<Vec<User>> {
        self.fetch_all("SELECT id, username FROM users ORDER BY id", &[])
            .await
    }
}
