//! Point-to-point routing via the GraphHopper `/route` endpoint

use async_trait::async_trait;
use domain::{Coordinate, TravelMode};
use tracing::{debug, instrument, warn};

use crate::client::GraphHopperClient;
use crate::error::GraphHopperError;
use crate::models::{RoutePath, RouteResponse};

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Request a route between two points and return the first path
    async fn route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        mode: TravelMode,
    ) -> Result<RoutePath, GraphHopperError>;
}

#[async_trait]
impl RoutingClient for GraphHopperClient {
    #[instrument(
        skip(self, from, to),
        fields(from = %from.to_point_param(), to = %to.to_point_param())
    )]
    async fn route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        mode: TravelMode,
    ) -> Result<RoutePath, GraphHopperError> {
        let params = [
            ("point", from.to_point_param()),
            ("point", to.to_point_param()),
            ("vehicle", mode.as_str().to_string()),
            ("locale", self.config().locale.clone()),
        ];

        let response: RouteResponse = self.get_json("route", &params).await?;

        let path = response.paths.into_iter().next().ok_or_else(|| {
            warn!("No paths in route response");
            GraphHopperError::NoRouteFound {
                from: from.to_point_param(),
                to: to.to_point_param(),
            }
        })?;

        debug!(
            distance_m = path.distance,
            time_ms = path.time,
            steps = path.instructions.as_ref().map_or(0, Vec::len),
            "Route found"
        );
        Ok(path)
    }
}
