//! Logging configuration section

use serde::{Deserialize, Serialize};

/// Log output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (e.g. "info", "integration_graphhopper=debug").
    /// Used when neither `RUST_LOG` nor `-v` flags are given.
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}
