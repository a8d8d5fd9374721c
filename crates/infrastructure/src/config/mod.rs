//! Application configuration
//!
//! Split into focused sub-modules:
//! - `graphhopper`: API endpoint, credential, timeout, locale
//! - `logging`: log filter and output format
//!
//! Sources are layered in this order, later ones winning: built-in defaults,
//! the optional `wayfinder.toml` (or an explicit path), then environment
//! variables prefixed with `WAYFINDER_` using `__` between nested keys
//! (e.g. `WAYFINDER_GRAPHHOPPER__API_KEY`).

mod graphhopper;
mod logging;

use std::path::Path;

use application::ApplicationError;
use integration_graphhopper::GraphHopperConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use graphhopper::GraphHopperAppConfig;
pub use logging::LoggingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WAYFINDER";

/// Default configuration file name (extension resolved by the loader)
pub const DEFAULT_CONFIG_NAME: &str = "wayfinder";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GraphHopper configuration
    #[serde(default)]
    pub graphhopper: GraphHopperAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `wayfinder.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    /// Environment source with the `WAYFINDER_` prefix and `__` nesting
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(base_url = %loaded.graphhopper.base_url, "Configuration loaded");
        Ok(loaded)
    }

    /// Check everything a request needs, once, before any request is made
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the API key is missing
    /// or a placeholder, or when endpoint settings are invalid.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.graphhopper_client_config().map(|_| ())
    }

    /// Build the validated client configuration for GraphHopper
    ///
    /// # Errors
    ///
    /// Same conditions as [`AppConfig::validate`].
    pub fn graphhopper_client_config(&self) -> Result<GraphHopperConfig, ApplicationError> {
        let client_config = self.graphhopper.to_client_config().ok_or_else(|| {
            ApplicationError::Configuration(format!(
                "GraphHopper API key is not set (use --api-key, GRAPHHOPPER_API_KEY, \
                 {ENV_PREFIX}_GRAPHHOPPER__API_KEY, or graphhopper.api_key in {DEFAULT_CONFIG_NAME}.toml)"
            ))
        })?;

        client_config
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("graphhopper: {e}")))?;

        Ok(client_config)
    }
}
