// ABOUTME: Route handlers for users, their exercises and exercise logs
// ABOUTME: Thin axum handlers that delegate to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User routes
//!
//! POST bodies are form-urlencoded; log filters come from the query string.
//! Every per-user route resolves the path id to an existing user before
//! doing anything else.

use crate::{
    constants::error_messages,
    errors::AppError,
    models::{Exercise, ExerciseInput, ExerciseLog, ExerciseLogEntry, ExerciseLogFilter, User},
    resources::ServerResources,
    services,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Form body for user creation
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserForm {
    /// Requested username
    pub username: Option<String>,
}

/// Response for a created user
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Confirmation message
    pub message: String,
    /// Generated id
    pub id: i64,
    /// Stored username
    pub username: String,
}

/// Response for a created exercise
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// Exercise id
    pub id: i64,
    /// Owner id
    pub user_id: i64,
    /// Owner username
    pub username: String,
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

impl ExerciseResponse {
    fn new(exercise: Exercise, user: User) -> Self {
        Self {
            id: exercise.id,
            user_id: exercise.user_id,
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Response for an exercise log
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseLogResponse {
    /// Owner id
    pub id: i64,
    /// Owner username
    pub username: String,
    /// Exercises matching the date filters, before the limit
    pub count: i64,
    /// Entries ordered by date
    pub logs: Vec<ExerciseLogEntry>,
}

impl ExerciseLogResponse {
    fn new(log: ExerciseLog, user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            count: log.count,
            logs: log.entries,
        }
    }
}

/// User routes handler
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/users/:id", get(Self::handle_get))
            .route("/api/users/:id/exercises", post(Self::handle_add_exercise))
            .route("/api/users/:id/logs", get(Self::handle_log))
            .with_state(resources)
    }

    /// Handle GET /api/users - List all users
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let users = services::users::list_users(&resources.database).await?;
        Ok((StatusCode::OK, Json(users)).into_response())
    }

    /// Handle POST /api/users - Create a user
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Form(form): Form<CreateUserForm>,
    ) -> Result<Response, AppError> {
        let user =
            services::users::create_user(&resources.database, form.username.as_deref()).await?;

        let response = CreateUserResponse {
            message: error_messages::USER_CREATED.to_owned(),
            id: user.id,
            username: user.username,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/users/:id - Get a single user
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        services::users::resolve_user(&resources.database, &id).await?;
        let user = services::users::get_user_by_id(&resources.database, &id).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle POST /api/users/:id/exercises - Log an exercise
    async fn handle_add_exercise(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Form(input): Form<ExerciseInput>,
    ) -> Result<Response, AppError> {
        let user = services::users::resolve_user(&resources.database, &id).await?;
        let today = Utc::now().date_naive();

        let exercise =
            services::exercises::add_exercise(&resources.database, &user, &input, today).await?;

        let response = ExerciseResponse::new(exercise, user);
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/users/:id/logs - Filtered exercise log
    async fn handle_log(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Query(filter): Query<ExerciseLogFilter>,
    ) -> Result<Response, AppError> {
        let user = services::users::resolve_user(&resources.database, &id).await?;
        let log = services::exercises::get_exercise_log(&resources.database, &user, &filter).await?;

        Ok((StatusCode::OK, Json(ExerciseLogResponse::new(log, user))).into_response())
    }
}
