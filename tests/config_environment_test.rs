// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates required variables, defaults, parse errors and URL validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::required_env;
use std::collections::HashMap;
use strava_oracle_bridge::config::{BridgeConfig, Environment};
use strava_oracle_bridge::errors::ErrorCode;

fn load(env: &HashMap<String, String>) -> strava_oracle_bridge::errors::AppResult<BridgeConfig> {
    BridgeConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_loads_required_values_and_defaults() {
    let config = load(&required_env()).unwrap();

    assert_eq!(config.strava.client_id, "12345");
    assert_eq!(config.strava.client_secret.expose(), "strava-secret");
    assert_eq!(config.strava.token_url, "https://www.strava.com/oauth/token");
    assert_eq!(config.chainlink.api_key.expose(), "ea-access-key");
    assert_eq!(config.chainlink.secret.expose(), "ea-secret");
    assert_eq!(config.chainlink.url, "https://oracle.example/v2/requests");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.http_client.timeout_secs, None);
    assert_eq!(config.http_client.connect_timeout_secs, None);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
fn test_each_missing_variable_fails_fast() {
    for key in [
        "STRAVA_CLIENT_ID",
        "STRAVA_CLIENT_SECRET",
        "CHAINLINK_API_KEY",
        "CHAINLINK_SECRET",
        "CHAINLINK_URL",
    ] {
        let mut env = required_env();
        env.remove(key);

        let error = load(&env).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigMissing, "{key}");
        assert!(error.message.contains(key), "{key}");
    }
}

#[test]
fn test_empty_variable_counts_as_missing() {
    let mut env = required_env();
    env.insert("CHAINLINK_SECRET".into(), "   ".into());

    let error = load(&env).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
}

#[test]
fn test_optional_overrides() {
    let mut env = required_env();
    env.insert("STRAVA_TOKEN_URL".into(), "http://localhost:9000/oauth/token".into());
    env.insert("HTTP_PORT".into(), "3000".into());
    env.insert("HTTP_CLIENT_TIMEOUT_SECS".into(), "20".into());
    env.insert("HTTP_CLIENT_CONNECT_TIMEOUT_SECS".into(), "4".into());
    env.insert("ENVIRONMENT".into(), "prod".into());

    let config = load(&env).unwrap();
    assert_eq!(config.strava.token_url, "http://localhost:9000/oauth/token");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.http_client.timeout_secs, Some(20));
    assert_eq!(config.http_client.connect_timeout_secs, Some(4));
    assert_eq!(config.environment, Environment::Production);
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut bad_port = required_env();
    bad_port.insert("HTTP_PORT".into(), "70000".into());
    assert_eq!(load(&bad_port).unwrap_err().code, ErrorCode::ConfigInvalid);

    let mut bad_url = required_env();
    bad_url.insert("CHAINLINK_URL".into(), "oracle.example".into());
    assert_eq!(load(&bad_url).unwrap_err().code, ErrorCode::ConfigInvalid);

    let mut bad_scheme = required_env();
    bad_scheme.insert("STRAVA_TOKEN_URL".into(), "ftp://strava.example/token".into());
    assert_eq!(load(&bad_scheme).unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_summary_and_debug_hide_secrets() {
    let config = load(&required_env()).unwrap();

    let summary = config.summary();
    let debug = format!("{config:?}");
    for secret in ["strava-secret", "ea-access-key", "ea-secret"] {
        assert!(!summary.contains(secret), "summary leaked {secret}");
        assert!(!debug.contains(secret), "debug leaked {secret}");
    }
    assert!(summary.contains("12345"));
}
