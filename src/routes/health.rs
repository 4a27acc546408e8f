// ABOUTME: Liveness and readiness endpoints for the callback bridge
// ABOUTME: Readiness reports the service identity and the oracle adapter it feeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{oracle, service_names};
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body returned by `/health` and `/ready`
#[derive(Debug, Serialize)]
pub struct ProbeStatus {
    /// `healthy` or `ready`
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Adapter scheduled for each accepted callback, readiness only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_adapter: Option<&'static str>,
    /// RFC 3339 time of the probe
    pub timestamp: String,
}

impl ProbeStatus {
    fn new(status: &'static str, oracle_adapter: Option<&'static str>) -> Self {
        Self {
            status,
            service: service_names::STRAVA_ORACLE_BRIDGE,
            version: env!("CARGO_PKG_VERSION"),
            oracle_adapter,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
    }

    async fn health() -> Json<ProbeStatus> {
        Json(ProbeStatus::new("healthy", None))
    }

    // Configuration is validated before the router exists, so a served
    // request means both upstreams are configured
    async fn ready() -> Json<ProbeStatus> {
        Json(ProbeStatus::new("ready", Some(oracle::EXTERNAL_ADAPTER_NAME)))
    }
}
