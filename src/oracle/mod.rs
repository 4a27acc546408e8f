// ABOUTME: Oracle request payload, receipt and client abstraction
// ABOUTME: Defines the single create_request capability the callback handler depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Oracle Requests
//!
//! After a successful token exchange the access token is handed to an
//! off-chain oracle service, which schedules the `strava_oauth_callback`
//! adapter to use it. The handler only needs one capability from that
//! service, expressed by [`OracleClient`], so tests can substitute a fake.

/// HTTP client for a Chainlink external initiator endpoint
pub mod chainlink;

pub use chainlink::ChainlinkClient;

use crate::constants::oracle;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body submitted to the oracle service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleRequestPayload {
    access_token: String,
    external_adapter_name: String,
}

impl OracleRequestPayload {
    /// Build a payload for the Strava callback adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is empty
    pub fn new(access_token: impl Into<String>) -> AppResult<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(AppError::invalid_input(
                "oracle request requires a non-empty access token",
            ));
        }
        Ok(Self {
            access_token,
            external_adapter_name: oracle::EXTERNAL_ADAPTER_NAME.to_owned(),
        })
    }

    /// Access token forwarded to the adapter
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Adapter the oracle job invokes
    #[must_use]
    pub fn external_adapter_name(&self) -> &str {
        &self.external_adapter_name
    }
}

/// Whatever the oracle service answered with
///
/// Success is judged by truthiness: `null`, `false`, `0`, `""`, `[]` and
/// `{}` all mean the request was not created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OracleReceipt(serde_json::Value);

impl OracleReceipt {
    /// Wrap a raw response value
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Receipt for a response that carried nothing
    #[must_use]
    pub const fn empty() -> Self {
        Self(serde_json::Value::Null)
    }

    /// Whether the oracle accepted the request
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v.abs() > 0.0),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(fields) => !fields.is_empty(),
        }
    }

    /// Request id from `id` or `data.id`, if the service returned one
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.0
            .get("id")
            .or_else(|| self.0.get("data").and_then(|data| data.get("id")))
            .and_then(serde_json::Value::as_str)
    }

    /// Raw response value
    #[must_use]
    pub const fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Creates oracle requests
#[async_trait]
pub trait OracleClient: Send + Sync {
    /// Submit a request; the returned receipt may be empty
    ///
    /// # Errors
    ///
    /// Returns an error if the oracle service cannot be reached
    async fn create_request(&self, payload: &OracleRequestPayload) -> AppResult<OracleReceipt>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_adapter_name_is_fixed() {
        for token in ["tok_x", "another-token", "t"] {
            let payload = OracleRequestPayload::new(token).unwrap();
            assert_eq!(payload.external_adapter_name(), "strava_oauth_callback");
            assert_eq!(payload.access_token(), token);
        }
    }

    #[test]
    fn test_payload_rejects_empty_token() {
        assert!(OracleRequestPayload::new("").is_err());
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = OracleRequestPayload::new("tok_x").unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"access_token": "tok_x", "external_adapter_name": "strava_oauth_callback"})
        );
    }

    #[test]
    fn test_receipt_truthiness() {
        let falsy = [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})];
        for value in falsy {
            assert!(!OracleReceipt::new(value.clone()).is_truthy(), "{value} should be falsy");
        }

        let truthy = [json!(true), json!(1), json!("ok"), json!([1]), json!({"id": "req_1"})];
        for value in truthy {
            assert!(OracleReceipt::new(value.clone()).is_truthy(), "{value} should be truthy");
        }
    }

    #[test]
    fn test_receipt_request_id() {
        assert_eq!(
            OracleReceipt::new(json!({"id": "req_1"})).request_id(),
            Some("req_1")
        );
        assert_eq!(
            OracleReceipt::new(json!({"data": {"id": "run_9"}})).request_id(),
            Some("run_9")
        );
        assert_eq!(OracleReceipt::empty().request_id(), None);
    }
}
