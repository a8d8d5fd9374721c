//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod distance;
mod place_name;
mod travel_duration;
mod travel_mode;

pub use coordinate::Coordinate;
pub use distance::{Distance, MILES_PER_KILOMETER};
pub use place_name::PlaceName;
pub use travel_duration::TravelDuration;
pub use travel_mode::{ModeSelection, TravelMode};
