// ABOUTME: Parameterized SQL construction for the filtered exercise log
// ABOUTME: Appends clauses and their positional parameters in lockstep, after validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise-log query construction.
//!
//! Filters are validated first; a rejected filter yields a
//! [`ValidationError`] and no SQL. Accepted filters become `?` placeholders,
//! never interpolated text, and each placeholder's value is pushed in the
//! same call that appends its fragment so the two stay aligned.
//!
//! Rows sharing a date come back in storage order; there is no secondary
//! sort key, so their relative order is stable within one call but not
//! guaranteed across different insert histories.

use crate::models::ExerciseLogFilter;
use crate::validation::{validate_log_filter, ValidationError};

/// Columns returned for each exercise-log entry
const LOG_COLUMNS: &str = "id, description, duration, date";

/// A positional statement parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    /// `INTEGER` value
    Integer(i64),
    /// `TEXT` value
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Statement text plus its positional parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlQuery {
    /// SQL with `?` placeholders
    pub text: String,
    /// One value per placeholder, in textual order
    pub params: Vec<SqlParam>,
}

impl SqlQuery {
    /// Start a statement with no parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    /// Append a fragment without a parameter
    #[must_use]
    pub fn push(mut self, fragment: &str) -> Self {
        self.text.push_str(fragment);
        self
    }

    /// Append a fragment together with the value for its placeholder
    #[must_use]
    pub fn push_bind(mut self, fragment: &str, param: impl Into<SqlParam>) -> Self {
        self.text.push_str(fragment);
        self.params.push(param.into());
        self
    }

    /// Append a fragment and its value only when `param` is present
    #[must_use]
    pub fn push_bind_opt<P: Into<SqlParam>>(self, fragment: &str, param: Option<P>) -> Self {
        match param {
            Some(param) => self.push_bind(fragment, param),
            None => self,
        }
    }

    /// Number of `?` placeholders in the text
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.text.matches('?').count()
    }
}

/// The two statements behind one exercise-log read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogQuery {
    /// Ordered, optionally limited entry rows
    pub rows: SqlQuery,
    /// Total number of rows matching the date filters. `LIMIT` does not apply.
    pub count: SqlQuery,
}

/// Build the exercise-log statements for `user_id`.
///
/// Clause order is fixed: user, `from`, `to`, ordering, `LIMIT`.
///
/// # Errors
///
/// Returns the first failing filter rule, checked in the order from, to, limit
pub fn build_exercise_log_query(
    user_id: i64,
    filter: &ExerciseLogFilter,
) -> Result<ExerciseLogQuery, ValidationError> {
    let bounds = validate_log_filter(filter)?;

    let filtered = SqlQuery::default()
        .push_bind(" WHERE user_id = ?", user_id)
        .push_bind_opt(" AND date >= ?", bounds.from)
        .push_bind_opt(" AND date <= ?", bounds.to);

    let count = SqlQuery {
        text: format!("SELECT COUNT(*) AS count FROM exercises{}", filtered.text),
        params: filtered.params.clone(),
    };

    let rows = SqlQuery {
        text: format!("SELECT {LOG_COLUMNS} FROM exercises{}", filtered.text),
        params: filtered.params,
    }
    .push(" ORDER BY date ASC")
    .push_bind_opt(" LIMIT ?", bounds.limit);

    Ok(ExerciseLogQuery { rows, count })
}
