// ABOUTME: SQLite data access layer: connection pool, schema and query primitives
// ABOUTME: Every statement runs with positional parameters and reports a structured DatabaseError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! The [`Database`] handle owns a `SQLite` pool. Opening a handle creates the
//! data directory and the storage file if needed, enables foreign-key
//! enforcement and runs the idempotent schema migration.
//!
//! Table-specific operations live in [`users`] and [`exercises`] as further
//! `impl Database` blocks; they are built on three primitives:
//! [`Database::execute`], [`Database::fetch_one`] and [`Database::fetch_all`].

/// Structured storage errors
pub mod errors;
/// Exercise table schema and operations
pub mod exercises;
/// Explicitly owned open/close slot for a single handle
pub mod lifecycle;
/// Parameterized exercise-log SQL
pub mod query_builder;
/// User table schema and operations
pub mod users;

pub use errors::{ConstraintKind, DatabaseError};
pub use lifecycle::DatabaseLifecycle;
pub use query_builder::{build_exercise_log_query, ExerciseLogQuery, SqlParam, SqlQuery};

use crate::config::{DatabaseConfig, DatabaseUrl};
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Arguments, FromRow, SqlitePool};
use std::str::FromStr;
use tracing::{debug, error, info};

/// Result alias for storage operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Open handle to the exercise store
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
    url: DatabaseUrl,
}

impl Database {
    /// Open the store described by `config` and ensure the schema exists.
    ///
    /// An in-memory store is pinned to one connection that is never recycled;
    /// each `SQLite` memory connection is a separate database.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data directory cannot be created
    /// - The storage file cannot be opened
    /// - Schema creation fails
    pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<Self> {
        let url = config.url.clone();
        let connection_string = url.to_connection_string();

        if let Some(parent) = url.file_path().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|source| {
                    DatabaseError::DataDirectory {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| DatabaseError::ConnectionFailed {
                url: connection_string.clone(),
                context: e.to_string(),
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| {
                error!(url = %connection_string, error = %e, "Failed to open database");
                DatabaseError::ConnectionFailed {
                    url: connection_string.clone(),
                    context: e.to_string(),
                }
            })?;

        let db = Self { pool, url };
        db.migrate().await?;

        info!(url = %db.url, "Database connected");
        Ok(db)
    }

    /// Create both tables if they are missing. Safe to run repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::MigrationFailed`] if a `CREATE` statement fails
    pub async fn migrate(&self) -> DatabaseResult<()> {
        self.migrate_users().await?;
        self.migrate_exercises().await?;
        Ok(())
    }

    /// Run a schema statement, tagging failures as migration errors
    async fn run_schema(&self, sql: &str) -> DatabaseResult<()> {
        sqlx::query(sql).execute(&self.pool).await.map_err(|e| {
            error!(error = %e, "Schema statement failed");
            DatabaseError::MigrationFailed {
                context: e.to_string(),
            }
        })?;
        Ok(())
    }

    /// Location this handle was opened with
    #[must_use]
    pub const fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    /// Run a write statement and return the id of the last inserted row
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails, with the constraint kind set
    /// when a schema constraint rejected the write
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> DatabaseResult<i64> {
        let result = sqlx::query_with(sql, arguments(params)?)
            .execute(&self.pool)
            .await
            .map_err(|e| log_failure(sql, e))?;
        debug!(sql, rows = result.rows_affected(), "Statement executed");
        Ok(result.last_insert_rowid())
    }

    /// Run a read statement and return its first row, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails or the row cannot be decoded
    pub async fn fetch_one<T>(&self, sql: &str, params: &[SqlParam]) -> DatabaseResult<Option<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        sqlx::query_as_with::<_, T, _>(sql, arguments(params)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| log_failure(sql, e))
    }

    /// Run a read statement and return every row
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails or a row cannot be decoded
    pub async fn fetch_all<T>(&self, sql: &str, params: &[SqlParam]) -> DatabaseResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        sqlx::query_as_with::<_, T, _>(sql, arguments(params)?)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| log_failure(sql, e))
    }

    /// Run a read statement that yields a single integer, such as `COUNT(*)`
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails or returns no row
    pub async fn fetch_scalar(&self, sql: &str, params: &[SqlParam]) -> DatabaseResult<i64> {
        sqlx::query_scalar_with::<_, i64, _>(sql, arguments(params)?)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| log_failure(sql, e))
    }

    /// Close every pooled connection. Later statements fail.
    pub async fn close(&self) {
        self.pool.close().await;
        info!(url = %self.url, "Database closed");
    }

    /// Whether [`Database::close`] has been called
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// Bind positional parameters in order
fn arguments<'q>(params: &[SqlParam]) -> DatabaseResult<SqliteArguments<'q>> {
    let mut args = SqliteArguments::default();
    for param in params {
        let bound = match param {
            SqlParam::Integer(value) => args.add(*value),
            SqlParam::Text(value) => args.add(value.clone()),
        };
        bound.map_err(|e| DatabaseError::QueryError {
            context: e.to_string(),
        })?;
    }
    Ok(args)
}

fn log_failure(sql: &str, error: sqlx::Error) -> DatabaseError {
    let error = DatabaseError::from(error);
    error!(sql, error = %error, "Database statement failed");
    error
}
