//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-wide
//! concerns: configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::GraphHopperAdapter;
pub use config::{AppConfig, GraphHopperAppConfig, LoggingConfig};
pub use telemetry::{LogFormat, TelemetryError, init_logging};
