// ABOUTME: Configuration management module for the OAuth callback bridge
// ABOUTME: Exposes the environment-backed configuration constructed once at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: credentials, endpoints and HTTP client settings read
//!   from environment variables and injected into the handler

/// Environment and server configuration
pub mod environment;

pub use environment::{
    BridgeConfig, ChainlinkConfig, Environment, HttpClientConfig, Secret, StravaConfig,
};
