//! GraphHopper client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Values shipped in sample configs that must never reach the API
const PLACEHOLDER_KEYS: [&str; 4] = [
    "your_api_key",
    "your_graphhopper_api_key",
    "tu_clave_api_graphhopper",
    "changeme",
];

/// Configuration for the GraphHopper Directions API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphHopperConfig {
    /// Base URL for the API (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Locale for instruction texts and geocoding results
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_base_url() -> String {
    "https://graphhopper.com/api/1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_locale() -> String {
    "es".to_string()
}

impl GraphHopperConfig {
    /// Create a configuration with default settings and the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout_secs(),
            locale: default_locale(),
        }
    }

    /// Create a configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: 5,
            ..Self::new("test-key")
        }
    }

    /// Whether the API key is absent, blank, or a known placeholder
    #[must_use]
    pub fn has_usable_api_key(&self) -> bool {
        let key = self.api_key.expose_secret().trim();
        !key.is_empty()
            && !PLACEHOLDER_KEYS
                .iter()
                .any(|placeholder| key.eq_ignore_ascii_case(placeholder))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !self.has_usable_api_key() {
            return Err("api_key is missing or still set to a placeholder".to_string());
        }

        Ok(())
    }
}
