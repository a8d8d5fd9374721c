//! GraphHopper adapter - Implements the geocoding and routing ports
//! using integration_graphhopper

use application::error::ApplicationError;
use application::ports::{GeocodingPort, RoutingPort};
use async_trait::async_trait;
use domain::{Coordinate, Distance, PlaceName, RouteResult, TravelDuration, TravelMode};
use integration_graphhopper::{
    GeocodingClient, GraphHopperClient, GraphHopperConfig, GraphHopperError, RoutePath,
    RoutingClient,
};
use tracing::{debug, instrument};

/// Adapter for the GraphHopper Directions API
///
/// One adapter serves both ports; share it behind an `Arc` for the planner.
#[derive(Debug)]
pub struct GraphHopperAdapter {
    client: GraphHopperClient,
}

impl GraphHopperAdapter {
    /// Create an adapter from a validated client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the client cannot be built.
    pub fn new(config: &GraphHopperConfig) -> Result<Self, ApplicationError> {
        let client = GraphHopperClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn with_client(client: GraphHopperClient) -> Self {
        Self { client }
    }

    fn map_error(error: GraphHopperError) -> ApplicationError {
        match error {
            e if e.is_not_found() => ApplicationError::NotFound(e.to_string()),
            e if e.is_transport() => ApplicationError::Transport(e.to_string()),
            GraphHopperError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            e => ApplicationError::Parse(e.to_string()),
        }
    }

    /// Normalize the first upstream path into a domain route
    fn to_route_result(path: &RoutePath) -> Result<RouteResult, ApplicationError> {
        let distance = Distance::from_meters(path.distance)
            .map_err(|e| ApplicationError::Parse(format!("route distance: {e}")))?;
        let duration = TravelDuration::from_millis(path.time);
        Ok(RouteResult::new(
            distance,
            duration,
            path.instruction_texts(),
        ))
    }
}

#[async_trait]
impl GeocodingPort for GraphHopperAdapter {
    #[instrument(skip_all, fields(place = %place))]
    async fn resolve(&self, place: &PlaceName) -> Result<Coordinate, ApplicationError> {
        let coordinate = self
            .client
            .geocode(place.as_str())
            .await
            .map_err(Self::map_error)?;
        debug!(%coordinate, "Place resolved");
        Ok(coordinate)
    }
}

#[async_trait]
impl RoutingPort for GraphHopperAdapter {
    #[instrument(skip_all, fields(mode = %mode))]
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<RouteResult, ApplicationError> {
        let path = self
            .client
            .route(origin, destination, mode)
            .await
            .map_err(Self::map_error)?;
        let route = Self::to_route_result(&path)?;
        debug!(
            distance_km = route.distance_km(),
            steps = route.instructions().len(),
            "Route received"
        );
        Ok(route)
    }
}
