// ABOUTME: Environment configuration for Strava credentials, oracle credentials and HTTP settings
// ABOUTME: Loads and validates required variables once at start-up so missing values fail fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{env_vars, network, strava};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;
use url::Url;
use zeroize::Zeroize;

/// Environment type for logging and deployment behaviour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Credential string that never appears in logs and is wiped on drop
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a secret value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the underlying value for an outbound request
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Strava application credentials
#[derive(Debug, Clone)]
pub struct StravaConfig {
    /// Strava application id
    pub client_id: String,
    /// Strava application secret
    pub client_secret: Secret,
    /// Token endpoint, overridable for staging and tests
    pub token_url: String,
}

/// Oracle request service credentials
#[derive(Debug, Clone)]
pub struct ChainlinkConfig {
    /// External initiator access key
    pub api_key: Secret,
    /// External initiator secret
    pub secret: Secret,
    /// Endpoint that accepts oracle request payloads
    pub url: String,
}

/// Outbound HTTP client settings
///
/// `None` leaves the reqwest default in place, which applies no overall
/// request timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    pub connect_timeout_secs: Option<u64>,
}

/// Process-wide configuration, built once and passed into the handler
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Token exchange settings
    pub strava: StravaConfig,
    /// Oracle service settings
    pub chainlink: ChainlinkConfig,
    /// Shared outbound client settings
    pub http_client: HttpClientConfig,
    /// Listen port for the HTTP surface
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
}

impl BridgeConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or empty, or if a
    /// value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or empty, or if a
    /// value cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> AppResult<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::config_missing(key))
        };

        // Every required key is checked before anything else is parsed
        for key in env_vars::REQUIRED {
            required(key)?;
        }

        let config = Self {
            strava: StravaConfig {
                client_id: required(env_vars::STRAVA_CLIENT_ID)?,
                client_secret: Secret::new(required(env_vars::STRAVA_CLIENT_SECRET)?),
                token_url: lookup(env_vars::STRAVA_TOKEN_URL)
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or_else(|| strava::TOKEN_URL.to_owned()),
            },
            chainlink: ChainlinkConfig {
                api_key: Secret::new(required(env_vars::CHAINLINK_API_KEY)?),
                secret: Secret::new(required(env_vars::CHAINLINK_SECRET)?),
                url: required(env_vars::CHAINLINK_URL)?,
            },
            http_client: HttpClientConfig {
                timeout_secs: parse_optional(&lookup, env_vars::HTTP_CLIENT_TIMEOUT_SECS)?,
                connect_timeout_secs: parse_optional(
                    &lookup,
                    env_vars::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            http_port: parse_optional(&lookup, env_vars::HTTP_PORT)?
                .unwrap_or(network::DEFAULT_HTTP_PORT),
            environment: lookup(env_vars::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate endpoint URLs
    ///
    /// # Errors
    ///
    /// Returns an error if the token or oracle URL is not an absolute
    /// `http`/`https` URL
    pub fn validate(&self) -> AppResult<()> {
        validate_http_url(env_vars::STRAVA_TOKEN_URL, &self.strava.token_url)?;
        validate_http_url(env_vars::CHAINLINK_URL, &self.chainlink.url)?;
        Ok(())
    }

    /// Log-safe configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Strava Oracle Bridge Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Strava Client ID: {}\n\
             - Strava Token URL: {}\n\
             - Oracle URL: {}\n\
             - HTTP Timeout: {}\n\
             - HTTP Connect Timeout: {}",
            self.http_port,
            self.environment,
            self.strava.client_id,
            self.strava.token_url,
            self.chainlink.url,
            self.http_client
                .timeout_secs
                .map_or_else(|| "client default".to_owned(), |s| format!("{s}s")),
            self.http_client
                .connect_timeout_secs
                .map_or_else(|| "client default".to_owned(), |s| format!("{s}s")),
        )
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::config_invalid(format!("Invalid {key} value: {raw}"))),
        _ => Ok(None),
    }
}

fn validate_http_url(key: &str, value: &str) -> AppResult<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::config_invalid(format!("{key} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::config_invalid(format!(
            "{key} must use http or https, got {other}"
        ))),
    }
}
