//! Geocoding service port
//!
//! Resolves a free-text place name to a single coordinate pair.

use async_trait::async_trait;
use domain::{Coordinate, PlaceName};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to the most relevant coordinate
    ///
    /// Returns `NotFound` when the upstream has no hit, `Transport` on
    /// network failure, and `Parse` for malformed responses.
    async fn resolve(&self, place: &PlaceName) -> Result<Coordinate, ApplicationError>;
}
