//! Bounded generation history with a navigation cursor.
//!
//! Snapshots are kept oldest → newest. The cursor counts generations into the
//! past: cursor 0 is the live grid (not stored here) and cursor `k >= 1`
//! selects the `k`-th most recent snapshot, `snapshots[len - k]`. Stepping
//! back increments the cursor, stepping forward decrements it, and the two
//! are exact inverses.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::LifeError;

/// What the display should show after a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Back at the present; show the live grid.
    Live,
    /// An independent copy of a retained snapshot.
    Past(Grid),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    snapshots: VecDeque<Grid>,
    capacity: usize,
    cursor: usize,
}

impl HistoryStore {
    /// Create an empty store; a capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_live(&self) -> bool {
        self.cursor == 0
    }

    /// Whether `push` would record anything right now.
    pub fn is_recording(&self) -> bool {
        self.cursor == 0 && self.capacity > 1
    }

    /// Record a snapshot, evicting the oldest ones beyond capacity.
    ///
    /// Ignored while viewing the past or when capacity is 1. Returns whether
    /// the snapshot was stored.
    pub fn push(&mut self, snapshot: Grid) -> bool {
        if !self.is_recording() {
            return false;
        }
        self.snapshots.push_back(snapshot);
        self.evict_excess();
        true
    }

    /// Move one generation further into the past.
    pub fn step_back(&mut self) -> Option<HistoryView> {
        if self.cursor >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        self.viewed().cloned().map(HistoryView::Past)
    }

    /// Move one generation toward the present.
    pub fn step_forward(&mut self) -> Option<HistoryView> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        match self.viewed() {
            Some(grid) => Some(HistoryView::Past(grid.clone())),
            None => Some(HistoryView::Live),
        }
    }

    /// The snapshot under the cursor, if not at the live step.
    pub fn viewed(&self) -> Option<&Grid> {
        if self.cursor == 0 {
            return None;
        }
        self.snapshots.get(self.snapshots.len() - self.cursor)
    }

    /// Resume from the viewed snapshot.
    ///
    /// The viewed snapshot is removed together with everything newer and
    /// returned as the new present; the cursor goes back to 0.
    pub fn rewind(&mut self) -> Option<Grid> {
        if self.cursor == 0 {
            return None;
        }
        let idx = self.snapshots.len().checked_sub(self.cursor)?;
        self.cursor = 0;
        let mut newer = self.snapshots.split_off(idx);
        newer.pop_front()
    }

    /// Change how many generations are retained.
    ///
    /// Zero is rejected and leaves the store untouched. Shrinking evicts the
    /// oldest snapshots immediately and pulls the cursor back in range. A
    /// capacity of 1 stops recording, so every snapshot is dropped and the
    /// cursor returns to the live grid.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), LifeError> {
        if capacity == 0 {
            return Err(LifeError::InvalidConfiguration {
                field: "history_length",
                value: 0,
            });
        }
        self.capacity = capacity;
        if capacity == 1 {
            self.clear();
        } else {
            self.evict_excess();
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }

    /// Retained snapshots, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Grid> {
        self.snapshots.iter()
    }

    fn evict_excess(&mut self) {
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
        self.cursor = self.cursor.min(self.snapshots.len());
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HISTORY_LENGTH)
    }
}
