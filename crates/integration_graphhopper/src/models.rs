//! GraphHopper wire models
//!
//! Typed subsets of the `/geocode` and `/route` response bodies. Fields the
//! client never reads are left out.

use serde::{Deserialize, Serialize};

/// Body of a `/geocode` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub hits: Vec<GeocodeHit>,
}

/// One geocoding candidate, ordered by relevance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeHit {
    /// Position of the hit
    pub point: GeoPoint,
    /// Display name of the hit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl GeocodeHit {
    /// Display label such as `Santiago, Región Metropolitana, Chile`
    ///
    /// Joins whichever of name, state and country are present; falls back to
    /// the coordinates when none are.
    #[must_use]
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [&self.name, &self.state, &self.country]
            .into_iter()
            .filter_map(Option::as_deref)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            format!("{},{}", self.point.lat, self.point.lng)
        } else {
            parts.join(", ")
        }
    }
}

/// Latitude/longitude pair as GraphHopper encodes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// Body of a `/route` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RouteResponse {
    #[serde(default)]
    pub paths: Vec<RoutePath>,
}

/// One candidate path between the requested points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Total distance in meters
    pub distance: f64,
    /// Total travel time in milliseconds
    pub time: u64,
    /// Turn-by-turn steps, absent when instructions were not requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<Instruction>>,
}

impl RoutePath {
    /// Instruction texts in route order; empty when the path has none
    #[must_use]
    pub fn instruction_texts(&self) -> Vec<String> {
        self.instructions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|step| step.text.clone())
            .collect()
    }
}

/// A single turn-by-turn step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Human-readable step text in the requested locale
    pub text: String,
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
