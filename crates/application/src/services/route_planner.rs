//! Route planning use case
//!
//! Resolves origin and destination names, then requests one route between
//! them. Calls run strictly one after another; a failed lookup stops the
//! pipeline before any later call is made.

use std::{fmt, sync::Arc};

use domain::{Coordinate, PlaceName, RouteResult, TravelMode};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, RoutingPort},
};

/// Input to [`RoutePlanner::plan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Where the trip starts
    pub origin: PlaceName,
    /// Where the trip ends
    pub destination: PlaceName,
    /// Vehicle profile
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Build a request from raw place names
    ///
    /// # Errors
    ///
    /// Returns a domain error if either name is blank.
    pub fn new(
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Self, ApplicationError> {
        Ok(Self {
            origin: PlaceName::new(origin)?,
            destination: PlaceName::new(destination)?,
            mode,
        })
    }
}

/// Output of a successful plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Origin as entered
    pub origin: PlaceName,
    /// Destination as entered
    pub destination: PlaceName,
    /// Resolved origin position
    pub origin_coordinate: Coordinate,
    /// Resolved destination position
    pub destination_coordinate: Coordinate,
    /// Mode the route was computed for
    pub mode: TravelMode,
    /// Normalized route metrics and narrative
    pub route: RouteResult,
}

/// Orchestrates geocoding and routing for a single trip
pub struct RoutePlanner {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
}

impl fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePlanner").finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a planner over the given ports
    pub fn new(geocoder: Arc<dyn GeocodingPort>, router: Arc<dyn RoutingPort>) -> Self {
        Self { geocoder, router }
    }

    /// Resolve both places and fetch the route between them
    ///
    /// # Errors
    ///
    /// Propagates the first failing step. If either place cannot be
    /// resolved, the routing port is never called.
    #[instrument(
        skip_all,
        fields(origin = %request.origin, destination = %request.destination, mode = %request.mode)
    )]
    pub async fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, ApplicationError> {
        let origin_coordinate = self.resolve(&request.origin).await?;
        let destination_coordinate = self.resolve(&request.destination).await?;

        let route = self
            .router
            .route(&origin_coordinate, &destination_coordinate, request.mode)
            .await
            .inspect_err(|e| warn!(error = %e, "Routing failed"))?;

        info!(
            distance_km = route.distance_km(),
            duration = %route.duration(),
            steps = route.instructions().len(),
            "Route planned"
        );

        Ok(RoutePlan {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            origin_coordinate,
            destination_coordinate,
            mode: request.mode,
            route,
        })
    }

    async fn resolve(&self, place: &PlaceName) -> Result<Coordinate, ApplicationError> {
        self.geocoder
            .resolve(place)
            .await
            .inspect_err(|e| warn!(%place, error = %e, "Geocoding failed"))
    }
}

#[cfg(test)]
mod tests {
    use domain::{Distance, TravelDuration};
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::ports::{MockGeocodingPort, MockRoutingPort};

    fn santiago() -> Coordinate {
        Coordinate::new(-33.4378, -70.6505).unwrap()
    }

    fn mendoza() -> Coordinate {
        Coordinate::new(-32.8895, -68.8458).unwrap()
    }

    fn sample_route() -> RouteResult {
        RouteResult::new(
            Distance::from_meters(10_000.0).unwrap(),
            TravelDuration::from_millis(3_600_000),
            vec!["Head north".to_string(), "Arrive".to_string()],
        )
    }

    fn request(mode: TravelMode) -> RouteRequest {
        RouteRequest::new("Santiago, Chile", "Mendoza, Argentina", mode).unwrap()
    }

    fn geocoder_for_both() -> MockGeocodingPort {
        let mut geocoder = MockGeocodingPort::new();
        let mut seq = Sequence::new();
        geocoder
            .expect_resolve()
            .with(eq(PlaceName::new("Santiago, Chile").unwrap()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(santiago()));
        geocoder
            .expect_resolve()
            .with(eq(PlaceName::new("Mendoza, Argentina").unwrap()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(mendoza()));
        geocoder
    }

    #[tokio::test]
    async fn plan_resolves_then_routes() {
        let mut router = MockRoutingPort::new();
        router
            .expect_route()
            .with(eq(santiago()), eq(mendoza()), eq(TravelMode::Bike))
            .times(1)
            .returning(|_, _, _| Ok(sample_route()));

        let planner = RoutePlanner::new(Arc::new(geocoder_for_both()), Arc::new(router));
        let plan = planner.plan(&request(TravelMode::Bike)).await.unwrap();

        assert_eq!(plan.origin.as_str(), "Santiago, Chile");
        assert_eq!(plan.destination_coordinate, mendoza());
        assert_eq!(plan.mode, TravelMode::Bike);
        assert_eq!(format!("{:.2}", plan.route.distance_km()), "10.00");
        assert_eq!(format!("{:.2}", plan.route.distance_miles()), "6.21");
        assert_eq!(plan.route.formatted_duration(), "01:00:00");
    }

    #[tokio::test]
    async fn origin_not_found_skips_everything_else() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_resolve()
            .times(1)
            .returning(|place| Err(ApplicationError::NotFound(place.to_string())));

        let mut router = MockRoutingPort::new();
        router.expect_route().times(0);

        let planner = RoutePlanner::new(Arc::new(geocoder), Arc::new(router));
        let err = planner.plan(&request(TravelMode::Car)).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("Santiago, Chile"));
    }

    #[tokio::test]
    async fn destination_not_found_never_routes() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_resolve()
            .with(eq(PlaceName::new("Santiago, Chile").unwrap()))
            .returning(|_| Ok(santiago()));
        geocoder
            .expect_resolve()
            .with(eq(PlaceName::new("Mendoza, Argentina").unwrap()))
            .returning(|place| Err(ApplicationError::NotFound(place.to_string())));

        let mut router = MockRoutingPort::new();
        router.expect_route().times(0);

        let planner = RoutePlanner::new(Arc::new(geocoder), Arc::new(router));
        let err = planner.plan(&request(TravelMode::Car)).await.unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound(ref p) if p == "Mendoza, Argentina"));
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        let mut router = MockRoutingPort::new();
        router
            .expect_route()
            .times(1)
            .returning(|_, _, _| Err(ApplicationError::Transport("timed out".to_string())));

        let planner = RoutePlanner::new(Arc::new(geocoder_for_both()), Arc::new(router));
        let err = planner.plan(&request(TravelMode::Foot)).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Transport(_)));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn empty_narrative_survives_planning() {
        let mut router = MockRoutingPort::new();
        router.expect_route().returning(|_, _, _| {
            Ok(RouteResult::new(
                Distance::from_meters(0.0).unwrap(),
                TravelDuration::from_millis(999),
                Vec::new(),
            ))
        });

        let planner = RoutePlanner::new(Arc::new(geocoder_for_both()), Arc::new(router));
        let plan = planner.plan(&request(TravelMode::Car)).await.unwrap();

        assert_eq!(plan.route.narrative(), "");
        assert_eq!(plan.route.formatted_duration(), "00:00:00");
    }

    #[test]
    fn request_rejects_blank_names() {
        assert!(RouteRequest::new("", "Mendoza", TravelMode::Car).is_err());
        assert!(RouteRequest::new("Santiago", "  ", TravelMode::Car).is_err());
    }

    #[test]
    fn plan_serializes_for_json_output() {
        let plan = RoutePlan {
            origin: PlaceName::new("A").unwrap(),
            destination: PlaceName::new("B").unwrap(),
            origin_coordinate: santiago(),
            destination_coordinate: mendoza(),
            mode: TravelMode::Motorcycle,
            route: sample_route(),
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mode"], "motorcycle");
        assert_eq!(json["origin"], "A");
    }
}
