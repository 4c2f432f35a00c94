//! State construction errors.
//!
//! Errors raised while decoding a grid or assembling an engine from its parts.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{MapDimensions, Position};

/// Errors that occur while decoding grid text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// Grid must have at least one row and one column.
    #[error("Grid dimensions must be non-zero (got {dimensions})")]
    EmptyDimensions { dimensions: MapDimensions },

    /// Fewer text rows than declared.
    #[error("Grid declares {expected} rows but only {found} were provided")]
    MissingRows { expected: u32, found: u32 },

    /// Character outside the cell symbol set.
    #[error("Unknown map symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use MapError::*;
        match self {
            EmptyDimensions { .. } => "MAP_EMPTY_DIMENSIONS",
            MissingRows { .. } => "MAP_MISSING_ROWS",
            UnknownSymbol { .. } => "MAP_UNKNOWN_SYMBOL",
        }
    }
}

/// Errors that prevent a session from starting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    /// The grid holds no `#` cell.
    #[error("Grid has no start cell")]
    MissingStart,

    /// Chest table and grid disagree on size.
    #[error("Chest table is {chests} but grid is {grid}")]
    DimensionMismatch {
        grid: MapDimensions,
        chests: MapDimensions,
    },

    /// The player would start dead or with no room to heal.
    #[error("Health must start above zero (health {health}, max {max_health})")]
    NonPositiveHealth { health: i32, max_health: i32 },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            MissingStart => "SETUP_MISSING_START",
            DimensionMismatch { .. } => "SETUP_DIMENSION_MISMATCH",
            NonPositiveHealth { .. } => "SETUP_NON_POSITIVE_HEALTH",
        }
    }
}
