//! Rewinding the most recent advance.

use super::{StepEngine, StepError, StepOutcome};

impl StepEngine {
    /// Restores the newest snapshot as one operation: grid, visited marks
    /// (rebuilt from the restored symbols), inventory counters, and the
    /// snapshot's cell back at the front of the frontier.
    ///
    /// Frontier entries appended by the undone advance stay queued, and
    /// parent links are left as they are.
    pub(super) fn undo(&mut self) -> Result<StepOutcome, StepError> {
        let snapshot = self.history.pop().ok_or(StepError::EmptyHistory)?;
        let position = snapshot.position();
        let restored = snapshot.counters();
        let reverted = snapshot.outcome();

        self.grid = snapshot.into_grid();
        self.visited.recompute_from(&self.grid);
        self.inventory.restore(restored);
        self.frontier.push_front(position);

        Ok(StepOutcome::Undone {
            position,
            restored,
            reverted,
        })
    }
}
