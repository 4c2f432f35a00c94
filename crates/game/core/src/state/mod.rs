//! Mutable maze state.
//!
//! This module owns the grid, the chest table, the player's inventory, and
//! the discovery bookkeeping (visited marks and parent links). The engine is
//! the only writer; frontends read it through [`crate::engine::TurnView`].
pub mod chest;
pub mod error;
pub mod grid;
pub mod inventory;
pub mod marks;
pub mod types;

pub use chest::{Chest, ChestTable};
pub use error::{MapError, SetupError};
pub use grid::Grid;
pub use inventory::{Inventory, InventoryCounters, PotionUse};
pub use marks::{ParentGrid, VisitedSet};
pub use types::{CardinalDirection, Cell, MapDimensions, Position};
