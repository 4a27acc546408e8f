// ABOUTME: Outbound HTTP client construction shared by the Strava and oracle clients
// ABOUTME: Applies optional timeouts from configuration and otherwise keeps reqwest defaults

use crate::config::HttpClientConfig;
use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Build the single client used for both outbound hops of an invocation
///
/// Unset timeouts are left to reqwest, which applies no overall deadline.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised
pub fn build_client(config: &HttpClientConfig) -> AppResult<Client> {
    let mut builder = ClientBuilder::new().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| AppError::config_invalid(format!("Failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_and_without_timeouts() {
        assert!(build_client(&HttpClientConfig::default()).is_ok());
        assert!(build_client(&HttpClientConfig {
            timeout_secs: Some(15),
            connect_timeout_secs: Some(5),
        })
        .is_ok());
    }
}
