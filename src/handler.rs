// ABOUTME: OAuth callback handler that exchanges the code and submits the oracle request
// ABOUTME: Produces the statusCode/body response envelope for every handled invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Callback Handler
//!
//! One invocation runs a fixed sequence:
//!
//! 1. read `code` from the event's query string parameters
//! 2. exchange it at the Strava token endpoint
//! 3. without an access token, answer 400
//! 4. submit `{access_token, external_adapter_name}` to the oracle service
//! 5. on an empty receipt, answer 500, otherwise 200
//!
//! Transport failures and malformed upstream bodies are returned as `Err`
//! and are not turned into envelopes.

use crate::config::BridgeConfig;
use crate::constants::{messages, oracle, strava};
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::oauth2_client::{StravaOAuthClient, TokenExchanger};
use crate::oracle::{ChainlinkClient, OracleClient, OracleRequestPayload};
use crate::utils::http_client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Invocation event delivered by the hosting platform
///
/// Only `queryStringParameters.code` is read; other event fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    /// Decoded query string of the redirect
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl InboundEvent {
    /// Build an event from already-decoded query parameters
    #[must_use]
    pub fn from_query(params: HashMap<String, String>) -> Self {
        Self {
            query_string_parameters: Some(params),
        }
    }

    /// Authorization code, if present and non-empty
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get("code")
            .map(String::as_str)
            .filter(|code| !code.is_empty())
    }
}

/// HTTP-shaped result of an invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// HTTP status of the outcome
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded string literal
    pub body: String,
}

impl ResponseEnvelope {
    fn with_message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(message.to_owned()).to_string(),
        }
    }

    /// Both hops completed
    #[must_use]
    pub fn success() -> Self {
        Self::with_message(200, messages::SUCCESS)
    }

    /// No access token was obtained
    #[must_use]
    pub fn oauth_failed() -> Self {
        Self::with_message(400, messages::OAUTH_FAILED)
    }

    /// The oracle service returned an empty result
    #[must_use]
    pub fn oracle_failed() -> Self {
        Self::with_message(500, messages::ORACLE_FAILED)
    }
}

/// Runs the two-hop token exchange for each inbound event
#[derive(Clone)]
pub struct CallbackHandler {
    token_exchanger: Arc<dyn TokenExchanger>,
    oracle: Arc<dyn OracleClient>,
}

impl CallbackHandler {
    /// Create a handler over injected collaborators
    #[must_use]
    pub fn new(token_exchanger: Arc<dyn TokenExchanger>, oracle: Arc<dyn OracleClient>) -> Self {
        Self {
            token_exchanger,
            oracle,
        }
    }

    /// Wire the Strava and Chainlink clients from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &BridgeConfig) -> AppResult<Self> {
        let client = http_client::build_client(&config.http_client)?;
        Ok(Self::new(
            Arc::new(StravaOAuthClient::new(config.strava.clone(), client.clone())),
            Arc::new(ChainlinkClient::new(config.chainlink.clone(), client)),
        ))
    }

    /// Handle one invocation
    ///
    /// # Errors
    ///
    /// Returns an error if either outbound call fails at the transport level
    /// or the token endpoint answers with something other than JSON
    pub async fn handle(&self, event: &InboundEvent) -> AppResult<ResponseEnvelope> {
        let invocation_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("oauth_callback", invocation.id = %invocation_id);

        self.run(event, &invocation_id)
            .instrument(span)
            .await
            .map_err(|e| e.with_request_id(invocation_id))
    }

    async fn run(&self, event: &InboundEvent, invocation_id: &str) -> AppResult<ResponseEnvelope> {
        let Some(code) = event.code() else {
            warn!("Callback invoked without an authorization code");
            return Ok(ResponseEnvelope::oauth_failed());
        };

        let exchange = self.token_exchanger.exchange_code(code).await?;
        let Some(access_token) = exchange.access_token() else {
            AppLogger::log_oauth_event(
                invocation_id,
                strava::PROVIDER_NAME,
                exchange.failure_reason(),
                false,
            );
            return Ok(ResponseEnvelope::oauth_failed());
        };
        AppLogger::log_oauth_event(invocation_id, strava::PROVIDER_NAME, "token_exchanged", true);
        let expires_at = exchange
            .expires_at_utc()
            .map(|expiry| expiry.to_rfc3339())
            .unwrap_or_default();
        match &exchange.athlete {
            Some(athlete) => info!(
                athlete.id = athlete.id,
                token.expires_at = %expires_at,
                "Token issued for athlete"
            ),
            None => info!(token.expires_at = %expires_at, "Token issued"),
        }

        let payload = OracleRequestPayload::new(access_token)?;
        let receipt = self.oracle.create_request(&payload).await?;
        let accepted = receipt.is_truthy();
        AppLogger::log_oracle_request(
            invocation_id,
            oracle::EXTERNAL_ADAPTER_NAME,
            accepted,
            receipt.request_id(),
        );

        if accepted {
            Ok(ResponseEnvelope::success())
        } else {
            warn!(oracle.response = %receipt.value(), "Oracle service returned an empty result");
            Ok(ResponseEnvelope::oracle_failed())
        }
    }
}
