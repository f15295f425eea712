// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Layers applied to the whole router by the route assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer construction
pub mod cors;
/// Request spans and response logging
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, request_trace_layer};
