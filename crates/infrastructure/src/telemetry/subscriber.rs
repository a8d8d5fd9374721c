//! Global subscriber installation

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when nothing else is configured
pub const DEFAULT_FILTER: &str = "warn";

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Pick JSON when `json` is set, pretty output otherwise
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Pretty }
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive as given
        directive: String,
        /// Parser message
        reason: String,
    },

    /// Failed to install the global subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Choose the effective filter directive
///
/// Precedence: `RUST_LOG`, then the filter derived from `-v` flags, then the
/// configured filter, then [`DEFAULT_FILTER`]. Blank values are skipped.
#[must_use]
pub fn resolve_filter(
    rust_log: Option<&str>,
    cli_filter: Option<&str>,
    configured: Option<&str>,
) -> String {
    [rust_log, cli_filter, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if `directive` is not a valid `EnvFilter` or a global
/// subscriber is already installed.
pub fn init_logging(directive: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_new(directive).map_err(|e| TelemetryError::InvalidFilter {
            directive: directive.to_string(),
            reason: e.to_string(),
        })?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(%directive, ?format, "Logging initialized");
    Ok(())
}
