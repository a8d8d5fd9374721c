//! GraphHopper configuration section

use integration_graphhopper::GraphHopperConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// GraphHopper settings as read from file and environment
///
/// The API key is optional here so a missing key can be reported with a
/// helpful message instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphHopperAppConfig {
    /// Base URL for the API (default: https://graphhopper.com/api/1)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Locale for instructions and geocoding (default: es)
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_base_url() -> String {
    "https://graphhopper.com/api/1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_locale() -> String {
    "es".to_string()
}

impl Default for GraphHopperAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            locale: default_locale(),
        }
    }
}

impl GraphHopperAppConfig {
    /// Replace the API key, e.g. with a value from the command line
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Convert to the client configuration
    ///
    /// Returns `None` if no API key is configured.
    #[must_use]
    pub fn to_client_config(&self) -> Option<GraphHopperConfig> {
        let api_key = self.api_key.as_ref()?;
        Some(GraphHopperConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            locale: self.locale.clone(),
        })
    }
}
