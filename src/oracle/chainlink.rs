// ABOUTME: Chainlink external initiator client that submits oracle request payloads over HTTP
// ABOUTME: Authenticates with access key and secret headers and maps responses onto receipts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{OracleClient, OracleReceipt, OracleRequestPayload};
use crate::config::ChainlinkConfig;
use crate::constants::oracle;
use crate::errors::AppResult;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Oracle client backed by a Chainlink node's external initiator endpoint
pub struct ChainlinkClient {
    config: ChainlinkConfig,
    client: reqwest::Client,
}

impl ChainlinkClient {
    /// Create a client over a shared `reqwest::Client`
    #[must_use]
    pub fn new(config: ChainlinkConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl OracleClient for ChainlinkClient {
    async fn create_request(&self, payload: &OracleRequestPayload) -> AppResult<OracleReceipt> {
        let response = self
            .client
            .post(&self.config.url)
            .header(oracle::ACCESS_KEY_HEADER, self.config.api_key.expose())
            .header(oracle::SECRET_HEADER, self.config.secret.expose())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                http.status = %status,
                oracle.adapter = %payload.external_adapter_name(),
                "Oracle service rejected request"
            );
            return Ok(OracleReceipt::empty());
        }

        debug!(http.status = %status, body.len = body.len(), "Oracle service responded");

        if body.trim().is_empty() {
            return Ok(OracleReceipt::empty());
        }

        // Plain-text acknowledgements are kept as a JSON string
        let value = serde_json::from_str(&body).unwrap_or_else(|_| serde_json::Value::String(body));
        Ok(OracleReceipt::new(value))
    }
}
