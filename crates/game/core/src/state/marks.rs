//! Discovery bookkeeping layered over the grid.

use super::{Grid, MapDimensions, Position};

/// Cells already enqueued or entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedSet {
    dimensions: MapDimensions,
    marks: Vec<bool>,
}

impl VisitedSet {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            marks: vec![false; dimensions.area()],
        }
    }

    /// Out-of-bounds positions read as unvisited.
    pub fn contains(&self, position: Position) -> bool {
        self.dimensions
            .index(position)
            .is_some_and(|index| self.marks[index])
    }

    pub fn mark(&mut self, position: Position) {
        if let Some(index) = self.dimensions.index(position) {
            self.marks[index] = true;
        }
    }

    /// Rebuilds every mark from cell symbols: floor, chests and doors read as
    /// unvisited, everything else (walls, trail, start, exit) as visited.
    ///
    /// This is not the inverse of forward marking; floor cells that were
    /// already enqueued become discoverable again.
    pub fn recompute_from(&mut self, grid: &Grid) {
        self.dimensions = grid.dimensions();
        self.marks.clear();
        self.marks
            .extend(grid.iter().map(|(_, cell)| !cell.reads_as_unvisited()));
    }

    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

/// Back-pointers from each discovered cell to the cell it was discovered from.
///
/// Used only to draw the solution path. Links are overwritten on
/// re-discovery and never reverted by undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentGrid {
    dimensions: MapDimensions,
    links: Vec<Option<Position>>,
}

impl ParentGrid {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            links: vec![None; dimensions.area()],
        }
    }

    pub fn get(&self, position: Position) -> Option<Position> {
        self.dimensions
            .index(position)
            .and_then(|index| self.links[index])
    }

    pub fn set(&mut self, position: Position, parent: Position) {
        if let Some(index) = self.dimensions.index(position) {
            self.links[index] = Some(parent);
        }
    }
}
