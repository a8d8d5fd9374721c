//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinates: {latitude},{longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Place name is empty after trimming
    #[error("Place name must not be empty")]
    EmptyPlaceName,

    /// Distance is negative or not a finite number
    #[error("Invalid distance: {0} m")]
    InvalidDistance(f64),

    /// Travel mode name not in the supported set
    #[error("Unknown travel mode: {0}")]
    UnknownTravelMode(String),
}
