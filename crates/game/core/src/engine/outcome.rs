//! Commands in, reports out.

use arrayvec::ArrayVec;

use crate::history::ChestOutcome;
use crate::state::{Cell, Chest, Grid, Inventory, InventoryCounters, Position, PotionUse};

/// One player decision per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    /// Enter the next frontier cell.
    Advance,
    /// Rewind the most recent advance.
    Undo,
    /// End the session without touching state.
    Quit,
}

/// Session state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    AwaitingInput,
    Won,
    LostNoPath,
    LostHealth,
    Quit,
}

impl SessionStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::AwaitingInput)
    }
}

/// Data a frontend renders before asking for a command.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Cell the next advance would enter.
    pub next: Position,
    pub grid: &'a Grid,
    pub inventory: &'a Inventory,
}

/// Result of a command that did not end in an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(AdvanceReport),
    Undone {
        /// Cell put back at the front of the frontier.
        position: Position,
        restored: InventoryCounters,
        /// Chest effect that was rewound (zero when the cell held no chest).
        reverted: ChestOutcome,
    },
    Quit,
}

/// What one advance did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Cell that was entered.
    pub position: Position,
    /// Kind of the cell before it was entered.
    pub entered: Cell,
    /// Present when the entered cell was a chest.
    pub chest: Option<ChestReport>,
    /// Doors opened with a key during discovery, in discovery order.
    pub unlocked: ArrayVec<Position, 4>,
    /// Neighbors appended to the frontier, in discovery order.
    pub discovered: ArrayVec<Position, 4>,
    /// `Won` when the exit was entered, otherwise `AwaitingInput`.
    pub status: SessionStatus,
}

/// Effects of opening a chest the player survived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChestReport {
    pub contents: Chest,
    /// Health after the trap, if one went off.
    pub health_after_trap: Option<i32>,
    pub potion: Option<PotionUse>,
    /// Key total after pickup, if the chest held keys.
    pub keys_total: Option<u32>,
}

/// Final state handed back once the engine is consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub status: SessionStatus,
    /// On `Won`, carries the solution path drawn as trail.
    pub grid: Grid,
    pub inventory: Inventory,
    /// Advances committed and not undone.
    pub steps: usize,
}
