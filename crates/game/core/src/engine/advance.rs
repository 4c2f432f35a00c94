//! Entering a cell: snapshot, resolve, discover.

use arrayvec::ArrayVec;

use super::{AdvanceReport, ChestReport, SessionStatus, StepEngine, StepError};
use crate::history::{ChestOutcome, Snapshot};
use crate::state::{CardinalDirection, Cell, Position};

impl StepEngine {
    pub(super) fn advance(&mut self) -> Result<AdvanceReport, StepError> {
        let position = self.frontier.pop_front().ok_or(StepError::EmptyFrontier)?;
        let entered = self
            .grid
            .get(position)
            .ok_or(StepError::OutOfBounds { position })?;

        let outcome = match entered {
            Cell::Chest => ChestOutcome::from(self.chests.get(position)),
            _ => ChestOutcome::NONE,
        };
        self.history.push(Snapshot::capture(
            position,
            &self.inventory,
            outcome,
            &self.grid,
        ));

        let mut report = AdvanceReport {
            position,
            entered,
            chest: None,
            unlocked: ArrayVec::new(),
            discovered: ArrayVec::new(),
            status: SessionStatus::AwaitingInput,
        };

        match entered {
            Cell::Exit => {
                self.mark_solution_path(position);
                self.status = SessionStatus::Won;
                report.status = SessionStatus::Won;
                return Ok(report);
            }
            Cell::Chest => report.chest = Some(self.open_chest(position)?),
            Cell::Start | Cell::Floor | Cell::Trail | Cell::Door | Cell::Wall => {}
        }

        self.mark_entered(position, entered);
        self.discover_neighbors(position, &mut report);
        Ok(report)
    }

    /// Resolves bomb, then potion, then keys. A fatal trap stops resolution
    /// before the potion and keys apply.
    fn open_chest(&mut self, position: Position) -> Result<ChestReport, StepError> {
        let contents = self.chests.get(position);
        let mut report = ChestReport {
            contents,
            health_after_trap: None,
            potion: None,
            keys_total: None,
        };

        if contents.bomb > 0 {
            self.inventory.trigger_bomb(contents.bomb);
            if self.inventory.is_dead() {
                self.status = SessionStatus::LostHealth;
                return Err(StepError::FatalHealthLoss {
                    position,
                    damage: contents.bomb,
                    health: self.inventory.health,
                });
            }
            report.health_after_trap = Some(self.inventory.health);
        }

        if contents.potion > 0 {
            report.potion = Some(self.inventory.use_potion(contents.potion));
        }

        if contents.keys > 0 {
            self.inventory.add_keys(contents.keys);
            report.keys_total = Some(self.inventory.keys);
        }

        Ok(report)
    }

    fn mark_entered(&mut self, position: Position, entered: Cell) {
        if !entered.is_landmark() {
            self.grid.apply(position, Cell::Trail);
        }
    }

    /// Queues passable, unvisited neighbors in fixed direction order.
    ///
    /// A locked door costs one key to open. Without a key it is skipped and
    /// left unvisited, so a later discovery pass can still open it.
    fn discover_neighbors(&mut self, position: Position, report: &mut AdvanceReport) {
        for direction in CardinalDirection::ALL {
            let neighbor = position.step(direction);
            let Some(cell) = self.grid.get(neighbor) else {
                continue;
            };
            if self.visited.contains(neighbor) {
                continue;
            }

            match cell {
                Cell::Wall => continue,
                Cell::Door => {
                    if !self.inventory.take_key() {
                        continue;
                    }
                    self.grid.apply(neighbor, Cell::Trail);
                    report.unlocked.push(neighbor);
                }
                Cell::Start | Cell::Exit | Cell::Chest | Cell::Floor | Cell::Trail => {}
            }

            self.visited.mark(neighbor);
            self.parents.set(neighbor, position);
            self.frontier.push_back(neighbor);
            report.discovered.push(neighbor);
        }
    }

    /// Draws the parent chain from `exit` back to the start as trail.
    ///
    /// The walk is capped at the grid area: links are never reverted on undo,
    /// so repeated undo/redo can leave a cycle.
    fn mark_solution_path(&mut self, exit: Position) {
        let mut current = exit;
        for _ in 0..self.grid.dimensions().area() {
            let Some(parent) = self.parents.get(current) else {
                break;
            };
            if let Some(cell) = self.grid.get(current) {
                if !cell.is_landmark() && cell != Cell::Wall {
                    self.grid.apply(current, Cell::Trail);
                }
            }
            current = parent;
        }
    }
}
