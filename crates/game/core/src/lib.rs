//! Stepped maze exploration engine.
//!
//! `maze-core` defines the rules of an interactive breadth-first maze walk:
//! the grid and chest state, the frontier queue, the undo history, and the
//! [`engine::StepEngine`] that ties them into a turn-based state machine.
//! It performs no I/O; map loading, loot generation and rendering live in
//! the collaborator crates that feed it.
pub mod config;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod history;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    AdvanceReport, ChestReport, Command, SessionResult, SessionStatus, StepEngine, StepError,
    StepOutcome, TurnView,
};
pub use error::{ErrorSeverity, GameError};
pub use frontier::Frontier;
pub use history::{ChestOutcome, History, Snapshot};
pub use state::{
    CardinalDirection, Cell, Chest, ChestTable, Grid, Inventory, InventoryCounters, MapDimensions,
    MapError, ParentGrid, Position, PotionUse, SetupError, VisitedSet,
};
