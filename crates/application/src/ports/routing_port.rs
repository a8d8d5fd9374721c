//! Routing service port

use async_trait::async_trait;
use domain::{Coordinate, RouteResult, TravelMode};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for routing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Request a route between two coordinates and normalize it
    ///
    /// Only the first upstream path is used. Error variants mirror
    /// [`GeocodingPort::resolve`](crate::ports::GeocodingPort::resolve).
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> Result<RouteResult, ApplicationError>;
}
