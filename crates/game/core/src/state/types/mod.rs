pub mod cell;
pub mod common;

pub use cell::Cell;
pub use common::{CardinalDirection, MapDimensions, Position};
