// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, configuration builders and fake outbound clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `strava_oracle_bridge`

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use strava_oracle_bridge::{
    config::{BridgeConfig, ChainlinkConfig, Environment, HttpClientConfig, Secret, StravaConfig},
    errors::AppResult,
    handler::{CallbackHandler, InboundEvent},
    oauth2_client::{TokenExchangeResponse, TokenExchanger},
    oracle::{OracleClient, OracleReceipt, OracleRequestPayload},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Complete set of required variables
pub fn required_env() -> HashMap<String, String> {
    HashMap::from([
        ("STRAVA_CLIENT_ID".to_owned(), "12345".to_owned()),
        ("STRAVA_CLIENT_SECRET".to_owned(), "strava-secret".to_owned()),
        ("CHAINLINK_API_KEY".to_owned(), "ea-access-key".to_owned()),
        ("CHAINLINK_SECRET".to_owned(), "ea-secret".to_owned()),
        (
            "CHAINLINK_URL".to_owned(),
            "https://oracle.example/v2/requests".to_owned(),
        ),
    ])
}

/// Configuration pointing both hops at test servers
pub fn test_config(token_url: &str, oracle_url: &str) -> BridgeConfig {
    BridgeConfig {
        strava: StravaConfig {
            client_id: "12345".to_owned(),
            client_secret: Secret::new("strava-secret"),
            token_url: token_url.to_owned(),
        },
        chainlink: ChainlinkConfig {
            api_key: Secret::new("ea-access-key"),
            secret: Secret::new("ea-secret"),
            url: oracle_url.to_owned(),
        },
        http_client: HttpClientConfig {
            timeout_secs: Some(5),
            connect_timeout_secs: Some(2),
        },
        http_port: 0,
        environment: Environment::Testing,
    }
}

/// Event carrying `code` in its query string parameters
pub fn event_with_code(code: &str) -> InboundEvent {
    InboundEvent::from_query(HashMap::from([("code".to_owned(), code.to_owned())]))
}

/// Token exchanger returning a canned response and recording codes
pub struct FakeTokenExchanger {
    response: TokenExchangeResponse,
    codes: Mutex<Vec<String>>,
}

impl FakeTokenExchanger {
    pub fn issuing(access_token: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            response: TokenExchangeResponse {
                access_token: access_token.map(str::to_owned),
                ..TokenExchangeResponse::default()
            },
            codes: Mutex::new(Vec::new()),
        })
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenExchanger for FakeTokenExchanger {
    async fn exchange_code(&self, code: &str) -> AppResult<TokenExchangeResponse> {
        self.codes.lock().unwrap().push(code.to_owned());
        Ok(self.response.clone())
    }
}

/// Oracle client returning a canned receipt and recording payloads
pub struct FakeOracle {
    receipt: OracleReceipt,
    payloads: Mutex<Vec<OracleRequestPayload>>,
}

impl FakeOracle {
    pub fn answering(value: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            receipt: OracleReceipt::new(value),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn payloads(&self) -> Vec<OracleRequestPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl OracleClient for FakeOracle {
    async fn create_request(&self, payload: &OracleRequestPayload) -> AppResult<OracleReceipt> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(self.receipt.clone())
    }
}

/// Handler over the given fakes
pub fn fake_handler(tokens: Arc<FakeTokenExchanger>, oracle: Arc<FakeOracle>) -> CallbackHandler {
    init_test_logging();
    CallbackHandler::new(tokens, oracle)
}
