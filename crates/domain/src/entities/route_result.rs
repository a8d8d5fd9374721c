//! Route result entity
//!
//! The unit-normalized summary of a single routing response.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::value_objects::{Distance, TravelDuration};

/// Distance, duration, and turn-by-turn narrative of one route
///
/// Built once from an upstream path and never mutated. Serializes to the
/// display units: `distance_km`, `distance_miles`, `duration` as `HH:MM:SS`
/// and `narrative`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    distance: Distance,
    duration: TravelDuration,
    instructions: Vec<String>,
}

impl RouteResult {
    /// Create a route result
    #[must_use]
    pub const fn new(
        distance: Distance,
        duration: TravelDuration,
        instructions: Vec<String>,
    ) -> Self {
        Self {
            distance,
            duration,
            instructions,
        }
    }

    /// Route length
    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }

    /// Route length in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance.kilometers()
    }

    /// Route length in miles
    #[must_use]
    pub fn distance_miles(&self) -> f64 {
        self.distance.miles()
    }

    /// Travel time
    #[must_use]
    pub const fn duration(&self) -> TravelDuration {
        self.duration
    }

    /// Travel time as `HH:MM:SS`
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        self.duration.to_string()
    }

    /// Individual instruction texts in route order
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Instructions joined by newlines; empty when the route has none
    #[must_use]
    pub fn narrative(&self) -> String {
        self.instructions.join("\n")
    }
}

impl Serialize for RouteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RouteResult", 4)?;
        state.serialize_field("distance_km", &self.distance_km())?;
        state.serialize_field("distance_miles", &self.distance_miles())?;
        state.serialize_field("duration", &self.formatted_duration())?;
        state.serialize_field("narrative", &self.narrative())?;
        state.end()
    }
}
