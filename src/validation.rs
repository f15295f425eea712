// ABOUTME: Input validation rules for dates, durations, limits, ids and exercise fields
// ABOUTME: Each rule accepts a raw value or returns the caller-facing rejection message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation
//!
//! Every rule runs before any storage access. Rejections are
//! [`ValidationError`] variants whose `Display` text is surfaced to callers
//! verbatim, so the wording is fixed.
//!
//! Where several rules apply to one request they are evaluated in a fixed
//! order and the first failure wins.

use crate::models::{ExerciseInput, ExerciseLogFilter, NewExercise};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Four digits, hyphen, two digits, hyphen, two digits. ASCII digits only.
static DATE_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").ok());

/// Plain decimal text: optional sign, digits, optional fraction. No exponent.
static DECIMAL_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").ok());

/// Largest magnitude an `f64` holds without losing integer precision
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// A rejected input value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `from` filter is not a real `YYYY-MM-DD` date
    #[error("Invalid 'from' date format. Use YYYY-MM-DD.")]
    InvalidFromDate,
    /// `to` filter is not a real `YYYY-MM-DD` date
    #[error("Invalid 'to' date format. Use YYYY-MM-DD.")]
    InvalidToDate,
    /// `limit` filter is not a positive integer
    #[error("Limit must be a positive integer.")]
    InvalidLimit,
    /// Exercise description absent or blank
    #[error("Description is required.")]
    MissingDescription,
    /// Exercise duration absent
    #[error("Duration is required.")]
    MissingDuration,
    /// Exercise duration present but not a positive integer
    #[error("Duration must be a positive integer.")]
    InvalidDuration,
    /// Exercise date present but not a real `YYYY-MM-DD` date
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDate,
    /// User id is not a positive integer
    #[error("Invalid user ID provided.")]
    InvalidUserId,
    /// Username field absent from the request
    #[error("Username is required.")]
    MissingUsername,
}

/// Check that `value` is a `YYYY-MM-DD` string naming a real calendar date.
///
/// The date is rebuilt from its parts and must read back as the same year,
/// month and day, which rejects overflowed values such as `2023-02-30`.
/// Calendar rules are proleptic Gregorian.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    let Some(shape) = DATE_SHAPE.as_ref() else {
        return false;
    };
    if !shape.is_match(value) {
        return false;
    }

    let mut parts = value.split('-').map(str::parse::<u32>);
    let (Some(Ok(year)), Some(Ok(month)), Some(Ok(day))) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Ok(year) = i32::try_from(year) else {
        return false;
    };

    NaiveDate::from_ymd_opt(year, month, day).is_some_and(|date| {
        date.year() == year && date.month() == month && date.day() == day
    })
}

/// Parse a whole number. The numeric value must be integral: `"60"` and
/// `"60.0"` parse, `"60.5"`, `"1e2"` and `"abc"` do not.
fn parse_whole_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    if !DECIMAL_SHAPE
        .as_ref()
        .is_some_and(|shape| shape.is_match(trimmed))
    {
        return None;
    }

    let numeric: f64 = trimmed.parse().ok()?;
    let integral = numeric.is_finite()
        && numeric.fract().abs() < f64::EPSILON
        && numeric.abs() <= MAX_EXACT_FLOAT;
    integral.then_some(numeric as i64)
}

fn parse_positive_integer(raw: &str) -> Option<i64> {
    parse_whole_number(raw).filter(|value| *value > 0)
}

/// Validate a required exercise duration, in minutes
///
/// # Errors
///
/// [`ValidationError::MissingDuration`] when absent,
/// [`ValidationError::InvalidDuration`] when not a positive integer
pub fn validate_duration(raw: Option<&str>) -> Result<i64, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingDuration)?;
    parse_positive_integer(raw).ok_or(ValidationError::InvalidDuration)
}

/// Validate an optional row limit. Absence is always valid.
///
/// # Errors
///
/// [`ValidationError::InvalidLimit`] when present but not a positive integer
pub fn validate_limit(raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    raw.map(|value| parse_positive_integer(value).ok_or(ValidationError::InvalidLimit))
        .transpose()
}

/// Validate a required, non-blank exercise description. The text is kept as
/// given.
///
/// # Errors
///
/// [`ValidationError::MissingDescription`] when absent or blank
pub fn validate_description(raw: Option<&str>) -> Result<String, ValidationError> {
    raw.filter(|description| !description.trim().is_empty())
        .map(ToOwned::to_owned)
        .ok_or(ValidationError::MissingDescription)
}

/// Validate an optional exercise date, defaulting to `today`
///
/// # Errors
///
/// [`ValidationError::InvalidDate`] when present but not a real date
pub fn validate_exercise_date(
    raw: Option<&str>,
    today: NaiveDate,
) -> Result<String, ValidationError> {
    match raw.filter(|date| !date.is_empty()) {
        None => Ok(today.format("%Y-%m-%d").to_string()),
        Some(date) if is_valid_date(date) => Ok(date.to_owned()),
        Some(_) => Err(ValidationError::InvalidDate),
    }
}

/// Validate a user id supplied as text, e.g. a path segment
///
/// # Errors
///
/// [`ValidationError::InvalidUserId`] unless the value is a positive integer
pub fn parse_user_id(raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidUserId)
}

/// Validate the username field is present. Emptiness is enforced by the
/// storage check constraint, not here.
///
/// # Errors
///
/// [`ValidationError::MissingUsername`] when absent
pub fn validate_username(raw: Option<&str>) -> Result<&str, ValidationError> {
    raw.ok_or(ValidationError::MissingUsername)
}

/// Validate every exercise field, in the order description, duration, date
///
/// # Errors
///
/// Returns the first failing rule
pub fn validate_exercise_input(
    user_id: i64,
    input: &ExerciseInput,
    today: NaiveDate,
) -> Result<NewExercise, ValidationError> {
    let description = validate_description(input.description.as_deref())?;
    let duration = validate_duration(input.duration.as_deref())?;
    let date = validate_exercise_date(input.date.as_deref(), today)?;

    Ok(NewExercise {
        user_id,
        description,
        duration,
        date,
    })
}

/// Exercise-log filters that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogBounds<'a> {
    /// Inclusive lower date bound
    pub from: Option<&'a str>,
    /// Inclusive upper date bound
    pub to: Option<&'a str>,
    /// Maximum number of entries
    pub limit: Option<i64>,
}

/// Validate exercise-log filters in the order from, to, limit.
///
/// Empty `from`/`to` values count as absent. An empty `limit` is present and
/// therefore rejected.
///
/// # Errors
///
/// Returns the first failing rule
pub fn validate_log_filter(filter: &ExerciseLogFilter) -> Result<LogBounds<'_>, ValidationError> {
    let from = filter.from.as_deref().filter(|value| !value.is_empty());
    if from.is_some_and(|from| !is_valid_date(from)) {
        return Err(ValidationError::InvalidFromDate);
    }

    let to = filter.to.as_deref().filter(|value| !value.is_empty());
    if to.is_some_and(|to| !is_valid_date(to)) {
        return Err(ValidationError::InvalidToDate);
    }

    let limit = validate_limit(filter.limit.as_deref())?;

    Ok(LogBounds { from, to, limit })
}
