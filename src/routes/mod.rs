// ABOUTME: Route module organization for the callback bridge HTTP surface
// ABOUTME: Merges health and callback routers behind HTTP tracing middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// OAuth callback and invocation routes
pub mod callback;
/// Health check routes
pub mod health;

pub use callback::CallbackRoutes;
pub use health::HealthRoutes;

use crate::handler::CallbackHandler;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router
#[must_use]
pub fn router(handler: Arc<CallbackHandler>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(CallbackRoutes::routes(handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
