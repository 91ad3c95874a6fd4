pub mod bbox;
pub mod coordinate;
mod grammar;

pub use bbox::BoundingBoxMatcher;
pub use coordinate::{CoordinateMatcher, CoordinateMatches};
