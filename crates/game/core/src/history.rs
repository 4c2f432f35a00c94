//! Undo history.
//!
//! Every advance pushes a [`Snapshot`] taken before the step mutates anything.
//! Undo pops the newest one and moves its grid copy back into the engine.
//! Snapshots still stacked when a session ends are dropped with the engine.

use crate::state::{Chest, Grid, Inventory, InventoryCounters, Position};

/// Effect a chest is about to have on the cell being entered.
///
/// Recorded for reporting only; undo restores health from the counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChestOutcome {
    pub damage: u32,
    pub heal: u32,
}

impl ChestOutcome {
    pub const NONE: Self = Self { damage: 0, heal: 0 };
}

impl From<Chest> for ChestOutcome {
    fn from(chest: Chest) -> Self {
        Self {
            damage: chest.bomb,
            heal: chest.potion,
        }
    }
}

/// Everything needed to rewind one advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    position: Position,
    counters: InventoryCounters,
    outcome: ChestOutcome,
    grid: Grid,
}

impl Snapshot {
    /// Captures the state just before `position` is entered.
    pub fn capture(
        position: Position,
        inventory: &Inventory,
        outcome: ChestOutcome,
        grid: &Grid,
    ) -> Self {
        Self {
            position,
            counters: inventory.counters(),
            outcome,
            grid: grid.clone(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn counters(&self) -> InventoryCounters {
        self.counters
    }

    pub fn outcome(&self) -> ChestOutcome {
        self.outcome
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the snapshot, handing over ownership of its grid copy.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// LIFO stack of snapshots, bounded only by memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.stack.push(snapshot);
    }

    /// Newest snapshot, or `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Cell;

    fn snapshot_at(col: i32, grid: &Grid) -> Snapshot {
        Snapshot::capture(
            Position::new(0, col),
            &Inventory::new(10),
            ChestOutcome::NONE,
            grid,
        )
    }

    #[test]
    fn pops_newest_first() {
        let grid = Grid::load(1, 3, "#  ").unwrap();
        let mut history = History::new();
        history.push(snapshot_at(0, &grid));
        history.push(snapshot_at(1, &grid));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.position()), Some(Position::new(0, 1)));
        assert_eq!(history.pop().map(|s| s.position()), Some(Position::new(0, 0)));
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn snapshot_grid_is_detached_from_live_grid() {
        let mut grid = Grid::load(1, 3, "#  ").unwrap();
        let snapshot = snapshot_at(1, &grid);

        grid.apply(Position::new(0, 1), Cell::Trail);

        assert_eq!(snapshot.grid().get(Position::new(0, 1)), Some(Cell::Floor));
        assert_eq!(snapshot.into_grid().to_string(), "#  \n");
    }

    #[test]
    fn chest_outcome_mirrors_bomb_and_potion() {
        let chest = Chest {
            potion: 2,
            keys: 1,
            bomb: 3,
        };

        assert_eq!(ChestOutcome::from(chest), ChestOutcome { damage: 3, heal: 2 });
    }
}
