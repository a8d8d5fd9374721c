//! GraphHopper error types

use thiserror::Error;

/// Errors that can occur during geocoding or routing
#[derive(Debug, Error)]
pub enum GraphHopperError {
    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// API answered with a non-success status
    #[error("Request failed (HTTP {status}): {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or the status text
        message: String,
    },

    /// API key rejected (HTTP 401/403)
    #[error("API key rejected: {0}")]
    Unauthorized(String),

    /// Rate limit or credit quota exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse a response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Geocoding returned no hits for the place name
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Routing returned no paths
    #[error("No route found from {from} to {to}")]
    NoRouteFound {
        /// Origin point
        from: String,
        /// Destination point
        to: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GraphHopperError {
    /// Returns true if the call produced no result rather than failing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PlaceNotFound(_) | Self::NoRouteFound { .. })
    }

    /// Returns true if the failure happened at the network or HTTP level
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed { .. }
                | Self::Unauthorized(_)
                | Self::RateLimitExceeded { .. }
                | Self::Timeout { .. }
        )
    }
}
