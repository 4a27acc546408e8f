// ABOUTME: Logging configuration and structured logging setup for the callback bridge
// ABOUTME: Configures log levels, output formats and the structured events emitted per invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Production-ready logging configuration with structured output

use crate::config::Environment;
use crate::constants::service_names;
use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, falling back to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::STRAVA_ORACLE_BRIDGE.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create logging configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        // In production, use more detailed logging
        let is_production = environment.is_production();

        Self {
            level: lookup("RUST_LOG").unwrap_or_else(|| "info".into()),
            format: lookup("LOG_FORMAT")
                .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value)),
            include_location: is_production || lookup("LOG_INCLUDE_LOCATION").is_some(),
            include_thread: is_production || lookup("LOG_INCLUDE_THREAD").is_some(),
            include_spans: is_production || lookup("LOG_INCLUDE_SPANS").is_some(),
            service_name: lookup("SERVICE_NAME")
                .unwrap_or_else(|| service_names::STRAVA_ORACLE_BRIDGE.into()),
            service_version: lookup("SERVICE_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Build the filter with noise reduction for HTTP internals
    fn env_filter(&self) -> EnvFilter {
        let directive = |raw: &str, fallback: tracing::Level| {
            raw.parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::Directive::from(fallback))
        };

        EnvFilter::new(&self.level)
            .add_directive(directive("hyper=warn", tracing::Level::WARN))
            .add_directive(directive("hyper::proto=warn", tracing::Level::WARN))
            .add_directive(directive("reqwest=warn", tracing::Level::WARN))
            .add_directive(directive("tower_http=info", tracing::Level::INFO))
            .add_directive(directive(
                &format!("strava_oracle_bridge={}", self.level),
                tracing::Level::INFO,
            ))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Strava oracle bridge starting up"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log `OAuth` token exchange outcomes
    pub fn log_oauth_event(invocation_id: &str, provider: &str, event: &str, success: bool) {
        if success {
            info!(
                invocation.id = %invocation_id,
                oauth.provider = %provider,
                oauth.event = %event,
                oauth.success = %success,
                "OAuth event"
            );
        } else {
            warn!(
                invocation.id = %invocation_id,
                oauth.provider = %provider,
                oauth.event = %event,
                oauth.success = %success,
                "OAuth event"
            );
        }
    }

    /// Log oracle request outcomes
    pub fn log_oracle_request(
        invocation_id: &str,
        adapter: &str,
        success: bool,
        request_id: Option<&str>,
    ) {
        if success {
            info!(
                invocation.id = %invocation_id,
                oracle.adapter = %adapter,
                oracle.success = %success,
                oracle.request_id = request_id.unwrap_or("unknown"),
                "Oracle request"
            );
        } else {
            warn!(
                invocation.id = %invocation_id,
                oracle.adapter = %adapter,
                oracle.success = %success,
                "Oracle request"
            );
        }
    }

    /// Log `API` requests
    pub fn log_api_request(method: &str, path: &str, status: u16, duration_ms: u64) {
        info!(
            http.method = %method,
            http.path = %path,
            http.status = %status,
            http.duration_ms = %duration_ms,
            "HTTP request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lookup_defaults() {
        let config = LoggingConfig::from_lookup(|_| None);
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_location);
        assert_eq!(config.service_name, "strava-oracle-bridge");
    }

    #[test]
    fn test_production_enables_detail() {
        let config = LoggingConfig::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("production".into()),
            "LOG_FORMAT" => Some("json".into()),
            _ => None,
        });
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
        assert!(config.include_thread);
        assert!(config.include_spans);
    }

    #[test]
    fn test_env_filter_accepts_custom_level() {
        let config = LoggingConfig {
            level: "debug".into(),
            ..LoggingConfig::default()
        };
        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }
}
