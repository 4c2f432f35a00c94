//! Turn-based exploration state machine.
//!
//! The [`StepEngine`] owns the grid, chest table, inventory, frontier and
//! history for one session. Frontends drive it with two calls per turn:
//! [`StepEngine::prompt`] to obtain what to display, then
//! [`StepEngine::execute`] with the player's [`Command`].

mod advance;
mod errors;
mod outcome;
mod undo;

pub use errors::StepError;
pub use outcome::{
    AdvanceReport, ChestReport, Command, SessionResult, SessionStatus, StepOutcome, TurnView,
};

use crate::config::GameConfig;
use crate::frontier::Frontier;
use crate::history::History;
use crate::state::{
    Cell, ChestTable, Grid, Inventory, ParentGrid, Position, SetupError, VisitedSet,
};

/// Interactive breadth-first walk over a maze grid.
///
/// Starts in [`SessionStatus::AwaitingInput`] with the start cell queued and
/// marked visited. Every state change goes through [`StepEngine::execute`].
#[derive(Clone, Debug)]
pub struct StepEngine {
    grid: Grid,
    chests: ChestTable,
    inventory: Inventory,
    visited: VisitedSet,
    parents: ParentGrid,
    frontier: Frontier,
    history: History,
    start: Position,
    status: SessionStatus,
}

impl StepEngine {
    /// Creates an engine over `grid` with the given loot and starting inventory.
    pub fn new(grid: Grid, chests: ChestTable, inventory: Inventory) -> Result<Self, SetupError> {
        let dimensions = grid.dimensions();
        if chests.dimensions() != dimensions {
            return Err(SetupError::DimensionMismatch {
                grid: dimensions,
                chests: chests.dimensions(),
            });
        }
        if inventory.max_health <= 0 || inventory.is_dead() {
            return Err(SetupError::NonPositiveHealth {
                health: inventory.health,
                max_health: inventory.max_health,
            });
        }
        let start = grid.find(Cell::Start).ok_or(SetupError::MissingStart)?;

        let mut visited = VisitedSet::new(dimensions);
        let mut frontier = Frontier::new(dimensions);
        visited.mark(start);
        frontier.push_back(start);

        Ok(Self {
            grid,
            chests,
            inventory,
            visited,
            parents: ParentGrid::new(dimensions),
            frontier,
            history: History::new(),
            start,
            status: SessionStatus::AwaitingInput,
        })
    }

    /// Creates an engine with an inventory built from `config`.
    pub fn with_config(
        grid: Grid,
        chests: ChestTable,
        config: &GameConfig,
    ) -> Result<Self, SetupError> {
        Self::new(grid, chests, Inventory::from_config(config))
    }

    /// Begins a turn: checks the frontier and returns what to display.
    ///
    /// An empty frontier ends the session in [`SessionStatus::LostNoPath`].
    pub fn prompt(&mut self) -> Result<TurnView<'_>, StepError> {
        let next = self.require_candidate()?;
        Ok(TurnView {
            next,
            grid: &self.grid,
            inventory: &self.inventory,
        })
    }

    /// Executes one player command.
    ///
    /// Performs the same frontier check as [`StepEngine::prompt`] first, so a
    /// command can never be applied to a session with nowhere left to go.
    pub fn execute(&mut self, command: Command) -> Result<StepOutcome, StepError> {
        self.require_candidate()?;

        match command {
            Command::Quit => {
                self.status = SessionStatus::Quit;
                Ok(StepOutcome::Quit)
            }
            Command::Undo => self.undo(),
            Command::Advance => self.advance().map(StepOutcome::Advanced),
        }
    }

    /// Consumes the engine. Any snapshots still stacked are dropped here.
    pub fn finish(self) -> SessionResult {
        SessionResult {
            status: self.status,
            steps: self.history.len(),
            grid: self.grid,
            inventory: self.inventory,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn chests(&self) -> &ChestTable {
        &self.chests
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Cell the next advance would enter.
    pub fn next_candidate(&self) -> Option<Position> {
        self.frontier.peek_front()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_visited(&self, position: Position) -> bool {
        self.visited.contains(position)
    }

    pub fn parent_of(&self, position: Position) -> Option<Position> {
        self.parents.get(position)
    }

    fn require_candidate(&mut self) -> Result<Position, StepError> {
        if self.status.is_terminal() {
            return Err(StepError::SessionOver {
                status: self.status,
            });
        }
        match self.frontier.peek_front() {
            Some(next) => Ok(next),
            None => {
                self.status = SessionStatus::LostNoPath;
                Err(StepError::EmptyFrontier)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Chest, MapDimensions};

    fn engine(rows: u32, cols: u32, text: &str) -> StepEngine {
        let grid = Grid::load(rows, cols, text).unwrap();
        let chests = ChestTable::new(grid.dimensions());
        StepEngine::new(grid, chests, Inventory::new(10)).unwrap()
    }

    #[test]
    fn starts_with_only_the_start_cell_queued() {
        let engine = engine(2, 3, " # \n  @");

        assert_eq!(engine.status(), SessionStatus::AwaitingInput);
        assert_eq!(engine.start(), Position::new(0, 1));
        assert_eq!(engine.next_candidate(), Some(Position::new(0, 1)));
        assert_eq!(engine.frontier().len(), 1);
        assert!(engine.is_visited(Position::new(0, 1)));
        assert!(!engine.is_visited(Position::new(0, 0)));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn rejects_grid_without_start() {
        let grid = Grid::load(1, 2, " @").unwrap();
        let chests = ChestTable::new(grid.dimensions());

        let err = StepEngine::new(grid, chests, Inventory::new(10)).unwrap_err();
        assert_eq!(err, SetupError::MissingStart);
    }

    #[test]
    fn rejects_chest_table_of_other_size() {
        let grid = Grid::load(1, 2, "#@").unwrap();
        let chests = ChestTable::new(MapDimensions::new(2, 2));

        let err = StepEngine::new(grid, chests, Inventory::new(10)).unwrap_err();
        assert!(matches!(err, SetupError::DimensionMismatch { .. }));
    }

    #[test]
    fn rejects_non_positive_health() {
        let grid = Grid::load(1, 2, "#@").unwrap();
        let chests = ChestTable::new(grid.dimensions());

        let err = StepEngine::with_config(
            grid.clone(),
            chests.clone(),
            &GameConfig::with_max_health(0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SetupError::NonPositiveHealth {
                health: 0,
                max_health: 0
            }
        );

        let mut wounded = Inventory::new(10);
        wounded.health = -3;
        assert!(matches!(
            StepEngine::new(grid, chests, wounded),
            Err(SetupError::NonPositiveHealth { health: -3, .. })
        ));
    }

    #[test]
    fn quit_ends_session_without_mutation() {
        let mut engine = engine(1, 3, "# @");
        let grid_before = engine.grid().clone();

        assert_eq!(engine.execute(Command::Quit), Ok(StepOutcome::Quit));
        assert_eq!(engine.status(), SessionStatus::Quit);
        assert_eq!(engine.grid(), &grid_before);
        assert_eq!(engine.next_candidate(), Some(Position::new(0, 0)));
    }

    #[test]
    fn commands_after_terminal_state_are_rejected() {
        let mut engine = engine(1, 3, "# @");
        engine.execute(Command::Quit).unwrap();

        let err = engine.execute(Command::Advance).unwrap_err();
        assert_eq!(
            err,
            StepError::SessionOver {
                status: SessionStatus::Quit
            }
        );
        assert!(engine.prompt().is_err());
    }

    #[test]
    fn prompt_exposes_next_candidate_grid_and_inventory() {
        let mut engine = engine(1, 3, "# @");

        let view = engine.prompt().unwrap();
        assert_eq!(view.next, Position::new(0, 0));
        assert_eq!(view.grid.to_string(), "# @\n");
        assert_eq!(view.inventory.health, 10);
    }

    #[test]
    fn with_config_applies_starting_keys() {
        let grid = Grid::load(1, 2, "#@").unwrap();
        let chests = ChestTable::new(grid.dimensions())
            .with(Position::new(0, 1), Chest::EMPTY);
        let config = GameConfig {
            max_health: 7,
            starting_keys: 2,
        };

        let engine = StepEngine::with_config(grid, chests, &config).unwrap();
        assert_eq!(engine.inventory().keys, 2);
        assert_eq!(engine.inventory().health, 7);
        assert_eq!(engine.chests().iter().count(), 0);
    }
}
