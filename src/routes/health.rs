// ABOUTME: Health check route handler for liveness monitoring
// ABOUTME: Reports service identity and whether the storage handle is still open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::constants::service_names;
use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let (status, label) = if resources.database.is_closed() {
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        } else {
            (StatusCode::OK, "healthy")
        };

        (
            status,
            Json(serde_json::json!({
                "status": label,
                "service": service_names::EXERCISE_TRACKER,
                "version": env!("CARGO_PKG_VERSION"),
                "environment": resources.config.environment.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
