use std::collections::VecDeque;

use crate::stroke::PathRef;

/// Undo depth used when nothing else is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// A full copy of the document's path list.
///
/// Paths are reference counted and immutable, so a snapshot only clones
/// pointers.
pub type Snapshot = Vec<PathRef>;

/// Bounded stack of document snapshots, one per gesture.
///
/// Once full, pushing evicts the oldest snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Most recent snapshot, if any
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{PathEntity, PathId, PathKind, StrokeSettings};
    use egui::pos2;

    fn snapshot_with(id: &str) -> Snapshot {
        vec![PathEntity::new_ref(
            PathId::new(id),
            PathKind::Freehand,
            vec![pos2(0.0, 0.0), pos2(1.0, 1.0)],
            StrokeSettings::default(),
        )]
    }

    #[test]
    fn test_pop_returns_latest() {
        let mut history = History::default();
        history.push(snapshot_with("a"));
        history.push(snapshot_with("b"));
        assert_eq!(history.pop().unwrap()[0].id().as_str(), "b");
        assert_eq!(history.pop().unwrap()[0].id().as_str(), "a");
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_oldest_snapshot_is_evicted() {
        let mut history = History::new(3);
        for id in ["a", "b", "c", "d"] {
            history.push(snapshot_with(id));
        }
        assert_eq!(history.len(), 3);
        let ids: Vec<_> = std::iter::from_fn(|| history.pop())
            .map(|s| s[0].id().as_str().to_owned())
            .collect();
        assert_eq!(ids, ["d", "c", "b"]);
    }

    #[test]
    fn test_default_capacity() {
        let mut history = History::default();
        for _ in 0..25 {
            history.push(Vec::new());
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = History::new(0);
        history.push(Vec::new());
        assert!(!history.can_undo());
    }
}
