//! Ordered queue of discovered-but-not-entered cells.

use std::collections::VecDeque;

use crate::state::{MapDimensions, Position};

/// FIFO of pending coordinates with one exception: undo may put a cell back
/// at the front so it becomes the very next candidate.
///
/// Preallocated to the grid area, which bounds a walk without undo. Undo
/// keeps the entries the rewound advance appended and also re-queues the
/// rewound cell, so stale duplicates pile up and the queue can grow past
/// the area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    queue: VecDeque<Position>,
}

impl Frontier {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            queue: VecDeque::with_capacity(dimensions.area()),
        }
    }

    /// Appends a newly discovered cell.
    pub fn push_back(&mut self, position: Position) {
        self.queue.push_back(position);
    }

    /// Prepends a cell, overriding FIFO order. Only undo uses this.
    pub fn push_front(&mut self, position: Position) {
        self.queue.push_front(position);
    }

    pub fn pop_front(&mut self) -> Option<Position> {
        self.queue.pop_front()
    }

    pub fn peek_front(&self) -> Option<Position> {
        self.queue.front().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.queue.iter().copied()
    }
}
