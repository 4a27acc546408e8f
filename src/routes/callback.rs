// ABOUTME: HTTP routes that drive the OAuth callback handler
// ABOUTME: Serves the browser redirect target and a raw event invocation endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Callback routes
//!
//! `GET /oauth/callback` is the redirect URI registered with Strava: the
//! envelope's status and body become the HTTP response. `POST /invoke`
//! accepts a platform event and returns the envelope itself, the way a
//! function runtime would.

use crate::errors::AppError;
use crate::handler::{CallbackHandler, InboundEvent, ResponseEnvelope};
use crate::logging::AppLogger;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// OAuth callback routes
pub struct CallbackRoutes;

impl CallbackRoutes {
    /// Create the callback and invocation routes
    #[must_use]
    pub fn routes(handler: Arc<CallbackHandler>) -> Router {
        Router::new()
            .route("/oauth/callback", get(Self::handle_callback))
            .route("/invoke", post(Self::handle_invoke))
            .with_state(handler)
    }

    /// Handle the Strava redirect
    async fn handle_callback(
        State(handler): State<Arc<CallbackHandler>>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let envelope = handler.handle(&InboundEvent::from_query(params)).await?;

        AppLogger::log_api_request(
            "GET",
            "/oauth/callback",
            envelope.status_code,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(envelope_response(envelope))
    }

    /// Handle a platform-style invocation
    async fn handle_invoke(
        State(handler): State<Arc<CallbackHandler>>,
        Json(event): Json<InboundEvent>,
    ) -> Result<Json<ResponseEnvelope>, AppError> {
        Ok(Json(handler.handle(&event).await?))
    }
}

fn envelope_response(envelope: ResponseEnvelope) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope.body,
    )
        .into_response()
}
