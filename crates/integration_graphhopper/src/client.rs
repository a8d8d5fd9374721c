//! GraphHopper HTTP client
//!
//! Shared transport for the geocoding and routing endpoints: one
//! `reqwest::Client` with a bounded timeout, API-key injection, and
//! status-to-error mapping.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;
use crate::models::ErrorBody;

/// GraphHopper Directions API client
///
/// Implements both [`GeocodingClient`](crate::GeocodingClient) and
/// [`RoutingClient`](crate::RoutingClient). Every request is a single GET
/// with no retry and no caching.
#[derive(Debug)]
pub struct GraphHopperClient {
    client: Client,
    config: GraphHopperConfig,
}

impl GraphHopperClient {
    /// Create a new GraphHopper client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unusable or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, GraphHopperError> {
        if !config.has_usable_api_key() {
            return Err(GraphHopperError::ConfigurationError(
                "GraphHopper API key is missing or a placeholder".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("wayfinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GraphHopperError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GraphHopperConfig {
        &self.config
    }

    /// Issue a GET to `{base_url}/{endpoint}` and decode the JSON body
    ///
    /// The API key is appended here so callers never handle it.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, GraphHopperError> {
        let url = format!("{}/{endpoint}", self.config.base_url);

        debug!(%endpoint, "Sending GraphHopper request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = Self::check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_str(&body).map_err(|e| GraphHopperError::ParseError(e.to_string()))
    }

    /// Map a reqwest failure, stripping the URL so the key is never echoed
    fn transport_error(&self, error: reqwest::Error) -> GraphHopperError {
        if error.is_timeout() {
            GraphHopperError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            GraphHopperError::ConnectionFailed(error.without_url().to_string())
        }
    }

    /// Turn non-success statuses into typed errors
    async fn check_status(response: Response) -> Result<Response, GraphHopperError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!(?retry_after_secs, "GraphHopper rate limit exceeded");
            return Err(GraphHopperError::RateLimitExceeded { retry_after_secs });
        }

        let message = Self::error_message(response).await;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GraphHopperError::Unauthorized(message));
        }

        Err(GraphHopperError::RequestFailed {
            status: status.as_u16(),
            message,
        })
    }

    /// Extract `message` from an error body, falling back to the status text
    async fn error_message(response: Response) -> String {
        let status = response.status();
        let fallback = || {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        };

        match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| fallback()),
            Err(_) => fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_placeholder_key() {
        let config = GraphHopperConfig::new("YOUR_API_KEY");
        let result = GraphHopperClient::new(&config);
        assert!(matches!(
            result,
            Err(GraphHopperError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(GraphHopperClient::new(&GraphHopperConfig::new("")).is_err());
    }

    #[test]
    fn test_new_keeps_config() {
        let config = GraphHopperConfig::for_testing("http://localhost:1234");
        let client = GraphHopperClient::new(&config).unwrap();
        assert_eq!(client.config().base_url, "http://localhost:1234");
    }
}
