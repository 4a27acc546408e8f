// ABOUTME: Strava OAuth2 authorization code exchange client
// ABOUTME: Posts form-encoded credentials to the token endpoint and parses an optional access token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::StravaConfig;
use crate::constants::strava;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Form body of an authorization code exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenExchangeRequest<'a> {
    /// Strava application id
    pub client_id: &'a str,
    /// Strava application secret
    pub client_secret: &'a str,
    /// Authorization code from the redirect
    pub code: &'a str,
    /// Always `authorization_code`
    pub grant_type: &'a str,
}

impl<'a> TokenExchangeRequest<'a> {
    /// Build an `authorization_code` grant request
    #[must_use]
    pub const fn authorization_code(
        client_id: &'a str,
        client_secret: &'a str,
        code: &'a str,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            code,
            grant_type: strava::GRANT_TYPE_AUTHORIZATION_CODE,
        }
    }
}

/// Athlete summary Strava returns alongside a fresh token
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StravaAthleteSummary {
    /// Strava athlete id
    pub id: i64,
    /// Public profile handle
    pub username: Option<String>,
    /// Given name
    pub firstname: Option<String>,
    /// Family name
    pub lastname: Option<String>,
}

/// Token endpoint body, read field by field
///
/// Successful and rejected exchanges share this shape; a rejected code simply
/// leaves `access_token` empty and fills the error fields instead. Only a
/// JSON object can carry a token, and a malformed optional field is dropped
/// rather than failing the exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenExchangeResponse {
    /// Bearer token forwarded to the oracle
    pub access_token: Option<String>,
    /// Usually `Bearer`
    pub token_type: Option<String>,
    /// Expiry as Unix seconds
    pub expires_at: Option<i64>,
    /// Seconds until expiry
    pub expires_in: Option<i64>,
    /// Refresh token, unused by the bridge
    pub refresh_token: Option<String>,
    /// Athlete who authorized the application
    pub athlete: Option<StravaAthleteSummary>,
    /// Strava error summary, e.g. `Bad Request`
    pub message: Option<String>,
    /// `OAuth2` error code, e.g. `invalid_grant`
    pub error: Option<String>,
    /// Strava field-level error details
    pub errors: Option<Value>,
}

impl TokenExchangeResponse {
    /// Read a parsed token endpoint body
    ///
    /// Anything other than a JSON object yields a response without a token.
    #[must_use]
    pub fn from_json(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self::default();
        };
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_owned);
        let integer = |key: &str| fields.get(key).and_then(Value::as_i64);

        Self {
            access_token: text("access_token"),
            token_type: text("token_type"),
            expires_at: integer("expires_at"),
            expires_in: integer("expires_in"),
            refresh_token: text("refresh_token"),
            athlete: fields
                .get("athlete")
                .and_then(|athlete| StravaAthleteSummary::deserialize(athlete).ok()),
            message: text("message"),
            error: text("error"),
            errors: fields.get("errors").filter(|v| !v.is_null()).cloned(),
        }
    }

    /// Access token when present and non-empty
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }

    /// Token expiry as a timestamp
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }

    /// Short description of why no token was issued
    #[must_use]
    pub fn failure_reason(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("access_token missing from response")
    }
}

/// Exchanges an authorization code for an access token
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    /// Perform the exchange
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the endpoint does not
    /// answer with JSON
    async fn exchange_code(&self, code: &str) -> AppResult<TokenExchangeResponse>;
}

/// Strava token endpoint client
pub struct StravaOAuthClient {
    config: StravaConfig,
    client: reqwest::Client,
}

impl StravaOAuthClient {
    /// Create a client over a shared `reqwest::Client`
    #[must_use]
    pub fn new(config: StravaConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl TokenExchanger for StravaOAuthClient {
    async fn exchange_code(&self, code: &str) -> AppResult<TokenExchangeResponse> {
        let params = TokenExchangeRequest::authorization_code(
            &self.config.client_id,
            self.config.client_secret.expose(),
            code,
        );

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        // The status is not trusted: rejected codes come back as JSON too
        let status = response.status();
        let body = response.text().await?;
        debug!(http.status = %status, "Strava token endpoint responded");

        let parsed: Value = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(
                strava::PROVIDER_NAME,
                format!("token endpoint returned a non-JSON body (HTTP {status})"),
            )
            .with_source(e)
        })?;
        Ok(TokenExchangeResponse::from_json(&parsed))
    }
}
