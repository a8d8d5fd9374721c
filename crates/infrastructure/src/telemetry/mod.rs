//! Logging setup
//!
//! Installs a global `tracing` subscriber with an `EnvFilter` and either
//! human-readable or JSON output on stderr, keeping stdout free for results.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryError, init_logging, resolve_filter};
