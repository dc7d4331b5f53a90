use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Content and cursor captured before a state-changing command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub content: String,
    pub cursor: usize,
}

/// Undo stack of snapshots.
///
/// Unbounded unless a limit is set, in which case the oldest entry is
/// dropped once the stack grows past it.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<Snapshot>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.filter(|&n| n > 0),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                self.entries.pop_front();
                log::debug!("History limit of {} reached, dropped oldest entry", limit);
            }
        }
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
