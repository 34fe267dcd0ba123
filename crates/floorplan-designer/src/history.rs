//! Linear undo/redo history of shape-collection snapshots.
//!
//! Each entry is an owned deep copy of the whole collection, so later edits to
//! the live shapes never reach a stored entry. The first entry is the state the
//! history was created with, which makes the first checkpointed command
//! undoable.

use crate::model::Shape;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Vec<Shape>>,
    index: usize,
    capacity: usize,
}

impl History {
    /// Creates a history whose only entry is `initial`. A capacity below 1 is
    /// raised to 1.
    pub fn new(initial: &[Shape], capacity: usize) -> Self {
        Self {
            snapshots: vec![initial.to_vec()],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Cursor position of the snapshot matching the live state.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Records `shapes` as the newest snapshot. Anything after the cursor is
    /// discarded, and the oldest entry is dropped once the capacity is
    /// exceeded.
    pub fn checkpoint(&mut self, shapes: &[Shape]) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(shapes.to_vec());
        if self.snapshots.len() > self.capacity {
            let excess = self.snapshots.len() - self.capacity;
            self.snapshots.drain(..excess);
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Moves the cursor back and returns a copy of that snapshot, or `None`
    /// at the oldest entry.
    pub fn undo(&mut self) -> Option<Vec<Shape>> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Moves the cursor forward and returns a copy of that snapshot, or `None`
    /// at the newest entry.
    pub fn redo(&mut self) -> Option<Vec<Shape>> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Snapshot at `index`, if any.
    pub fn snapshot(&self, index: usize) -> Option<&[Shape]> {
        self.snapshots.get(index).map(Vec::as_slice)
    }

    /// Drops every entry and starts over from `initial`.
    pub fn reset(&mut self, initial: &[Shape]) {
        self.snapshots = vec![initial.to_vec()];
        self.index = 0;
    }

    /// Changes the capacity. Redo entries go first, newest first, then the
    /// oldest entries. The entry under the cursor is always kept.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        if self.snapshots.len() <= self.capacity {
            return;
        }
        let excess = self.snapshots.len() - self.capacity;
        let redo_tail = self.snapshots.len() - 1 - self.index;
        let from_tail = excess.min(redo_tail);
        self.snapshots.truncate(self.snapshots.len() - from_tail);

        let from_head = excess - from_tail;
        self.snapshots.drain(..from_head);
        self.index -= from_head;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&[], DEFAULT_HISTORY_CAPACITY)
    }
}
