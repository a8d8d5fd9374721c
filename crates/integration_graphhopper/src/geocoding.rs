//! Place-name geocoding via the GraphHopper `/geocode` endpoint
//!
//! Only the single most relevant hit is requested and used; there is no
//! disambiguation between candidates.

use async_trait::async_trait;
use domain::Coordinate;
use tracing::{debug, instrument, warn};

use crate::client::GraphHopperClient;
use crate::error::GraphHopperError;
use crate::models::{GeocodeHit, GeocodeResponse};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-text place name to coordinates
    async fn geocode(&self, place: &str) -> Result<Coordinate, GraphHopperError>;
}

impl GraphHopperClient {
    /// Fetch the most relevant geocoding hit for a place name
    ///
    /// # Errors
    ///
    /// Returns `PlaceNotFound` for blank names or empty result sets, and
    /// transport or parse errors from the request itself.
    #[instrument(skip(self))]
    pub async fn best_hit(&self, place: &str) -> Result<GeocodeHit, GraphHopperError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GraphHopperError::PlaceNotFound(
                "Place name must not be empty".to_string(),
            ));
        }

        let params = [
            ("q", place.to_string()),
            ("locale", self.config().locale.clone()),
            ("limit", "1".to_string()),
        ];

        let response: GeocodeResponse = self.get_json("geocode", &params).await?;

        response.hits.into_iter().next().ok_or_else(|| {
            warn!(%place, "No geocoding hits");
            GraphHopperError::PlaceNotFound(place.to_string())
        })
    }
}

#[async_trait]
impl GeocodingClient for GraphHopperClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Coordinate, GraphHopperError> {
        let hit = self.best_hit(place).await?;
        let coordinate = Coordinate::new(hit.point.lat, hit.point.lng)
            .map_err(|e| GraphHopperError::ParseError(e.to_string()))?;

        debug!(
            %place,
            resolved = %hit.label(),
            lat = hit.point.lat,
            lng = hit.point.lng,
            "Geocoded place"
        );
        Ok(coordinate)
    }
}
