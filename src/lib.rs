// ABOUTME: Main library entry point for the Strava OAuth to oracle request bridge
// ABOUTME: Exposes configuration, the callback handler, outbound clients and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strava Oracle Bridge
//!
//! OAuth redirect target for a Strava application. Each callback exchanges the
//! authorization code for an access token and forwards that token to an
//! oracle request service, which schedules the `strava_oauth_callback`
//! external adapter.
//!
//! ## Architecture
//!
//! - **Config**: credentials and endpoints loaded once from the environment
//! - **`OAuth2` client**: Strava token endpoint exchange
//! - **Oracle**: request payload, receipt and Chainlink client
//! - **Handler**: the event-in, envelope-out callback logic
//! - **Routes**: axum endpoints for the redirect, raw invocations and health
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use strava_oracle_bridge::config::BridgeConfig;
//! use strava_oracle_bridge::errors::AppResult;
//! use strava_oracle_bridge::handler::{CallbackHandler, InboundEvent};
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = BridgeConfig::from_env()?;
//!     let handler = CallbackHandler::from_config(&config)?;
//!
//!     let event = InboundEvent::from_query(HashMap::from([("code".into(), "abc123".into())]));
//!     let envelope = handler.handle(&event).await?;
//!     println!("{} {}", envelope.status_code, envelope.body);
//!
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// OAuth callback handler and response envelope
pub mod handler;

/// Structured logging setup
pub mod logging;

/// Strava authorization code exchange
pub mod oauth2_client;

/// Oracle request payloads and clients
pub mod oracle;

/// HTTP routes
pub mod routes;

/// HTTP server bootstrap
pub mod server;

/// Shared utilities
pub mod utils;
