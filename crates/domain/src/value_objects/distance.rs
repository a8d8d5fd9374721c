//! Route distance value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Statute miles per kilometer
pub const MILES_PER_KILOMETER: f64 = 0.621_371;

/// A non-negative route length, stored in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// Create a distance from meters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDistance` for negative or non-finite values.
    pub fn from_meters(meters: f64) -> Result<Self, DomainError> {
        if !meters.is_finite() || meters < 0.0 {
            return Err(DomainError::InvalidDistance(meters));
        }
        Ok(Self { meters })
    }

    /// Length in meters
    #[must_use]
    pub const fn meters(&self) -> f64 {
        self.meters
    }

    /// Length in kilometers
    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.meters / 1000.0
    }

    /// Length in miles, derived from kilometers
    #[must_use]
    pub fn miles(&self) -> f64 {
        self.kilometers() * MILES_PER_KILOMETER
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.kilometers())
    }
}
