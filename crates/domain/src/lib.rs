//! Domain layer for Wayfinder
//!
//! Contains the route vocabulary: places, coordinates, travel modes, and the
//! unit-normalized route result. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
