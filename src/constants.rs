// ABOUTME: Constants for the OAuth callback bridge: environment keys, endpoints and fixed messages
// ABOUTME: Groups Strava token exchange, oracle request and response envelope values by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded values shared by the configuration layer, the outbound clients
//! and the callback handler.

/// Environment variable names read at start-up
pub mod env_vars {
    /// Strava application client id
    pub const STRAVA_CLIENT_ID: &str = "STRAVA_CLIENT_ID";
    /// Strava application client secret
    pub const STRAVA_CLIENT_SECRET: &str = "STRAVA_CLIENT_SECRET";
    /// Override for the Strava token endpoint
    pub const STRAVA_TOKEN_URL: &str = "STRAVA_TOKEN_URL";
    /// Oracle external initiator access key
    pub const CHAINLINK_API_KEY: &str = "CHAINLINK_API_KEY";
    /// Oracle external initiator secret
    pub const CHAINLINK_SECRET: &str = "CHAINLINK_SECRET";
    /// Oracle request endpoint
    pub const CHAINLINK_URL: &str = "CHAINLINK_URL";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Outbound request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Outbound connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Variables that must be present and non-empty
    pub const REQUIRED: [&str; 5] = [
        STRAVA_CLIENT_ID,
        STRAVA_CLIENT_SECRET,
        CHAINLINK_API_KEY,
        CHAINLINK_SECRET,
        CHAINLINK_URL,
    ];
}

/// Strava OAuth token endpoint values
pub mod strava {
    /// Token exchange endpoint
    pub const TOKEN_URL: &str = "https://www.strava.com/oauth/token";
    /// Grant type sent with every code exchange
    pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
    /// Provider name used in structured logs
    pub const PROVIDER_NAME: &str = "strava";
}

/// Oracle request values
pub mod oracle {
    /// External adapter the oracle job hands the token to
    pub const EXTERNAL_ADAPTER_NAME: &str = "strava_oauth_callback";
    /// External initiator access key header
    pub const ACCESS_KEY_HEADER: &str = "X-Chainlink-EA-AccessKey";
    /// External initiator secret header
    pub const SECRET_HEADER: &str = "X-Chainlink-EA-Secret";
}

/// Fixed bodies of the response envelope
pub mod messages {
    /// Both hops completed
    pub const SUCCESS: &str = "OAuth and Chainlink process succeeded";
    /// Token exchange produced no access token
    pub const OAUTH_FAILED: &str = "OAuth process failed";
    /// Oracle service returned an empty result
    pub const ORACLE_FAILED: &str = "Failed to create Chainlink request";
}

/// Service identity for structured logging
pub mod service_names {
    /// Default service name
    pub const STRAVA_ORACLE_BRIDGE: &str = "strava-oracle-bridge";
}

/// Network defaults
pub mod network {
    /// Port used when `HTTP_PORT` is unset
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}
