use std::collections::VecDeque;

use crate::params::model::Parameters;

/// Default number of snapshots kept.
pub const HISTORY_CAPACITY: usize = 100;

/// Bounded undo/redo stack of parameter snapshots.
///
/// `push` drops any redo tail; once full, the oldest snapshot is evicted.
#[derive(Clone, Debug)]
pub struct ParamHistory {
    entries: VecDeque<Parameters>,
    cursor: usize,
    capacity: usize,
}

impl Default for ParamHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl ParamHistory {
    /// Empty history holding at most `capacity` snapshots (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY)),
            cursor: 0,
            capacity,
        }
    }

    /// Record a new snapshot as the current state.
    pub fn push(&mut self, params: Parameters) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(params);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back; returns the new current snapshot.
    pub fn undo(&mut self) -> Option<&Parameters> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward; returns the new current snapshot.
    pub fn redo(&mut self) -> Option<&Parameters> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// `true` when [`ParamHistory::undo`] would move.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// `true` when [`ParamHistory::redo`] would move.
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Snapshot at the cursor, if any.
    pub fn current(&self) -> Option<&Parameters> {
        self.entries.get(self.cursor)
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/history.rs"]
mod tests;
