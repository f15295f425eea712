// ABOUTME: Route module organization for the exercise tracker HTTP endpoints
// ABOUTME: Assembles domain routers and applies the CORS and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the exercise tracker
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check route
pub mod health;
/// User, exercise and exercise-log routes
pub mod users;

/// Health route handlers
pub use health::HealthRoutes;
/// User route handlers
pub use users::UserRoutes;

use crate::middleware::{request_trace_layer, setup_cors};
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Build the complete application router
pub fn app_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(UserRoutes::routes(resources))
        .layer(cors)
        .layer(request_trace_layer())
}
