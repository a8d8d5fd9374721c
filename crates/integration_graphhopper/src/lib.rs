//! GraphHopper integration for Wayfinder
//!
//! Provides place-name geocoding and point-to-point routing via the
//! [GraphHopper Directions API](https://docs.graphhopper.com). Both endpoints
//! authenticate with an API key passed as the `key` query parameter.
//!
//! # Architecture
//!
//! [`GeocodingClient`] and [`RoutingClient`] define the two operations; a single
//! [`GraphHopperClient`] implements both, sharing one HTTP client, timeout,
//! and credential.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::TravelMode;
//! use integration_graphhopper::{
//!     GeocodingClient, GraphHopperClient, GraphHopperConfig, RoutingClient,
//! };
//!
//! let client = GraphHopperClient::new(&GraphHopperConfig::new("my-key"))?;
//! let origin = client.geocode("Santiago, Chile").await?;
//! let destination = client.geocode("Mendoza, Argentina").await?;
//! let path = client.route(&origin, &destination, TravelMode::Car).await?;
//! println!("{} m in {} ms", path.distance, path.time);
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;
mod routing;

pub use client::GraphHopperClient;
pub use config::GraphHopperConfig;
pub use error::GraphHopperError;
pub use geocoding::GeocodingClient;
pub use models::{GeoPoint, GeocodeHit, Instruction, RoutePath};
pub use routing::RoutingClient;
