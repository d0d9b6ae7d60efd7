// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::VecDeque;

use tracing::trace;

use super::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Mount,
    Push,
    Replace,
    Pop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationChange {
    pub path: String,
    pub kind: ChangeKind,
}

/// In-memory location history.
///
/// Every navigation queues a [`LocationChange`]; the host drains them one at a time so
/// reconciliation passes never overlap.
#[derive(Debug, Clone)]
pub struct LocationHistory {
    entries: Vec<String>,
    cursor: usize,
    pending: VecDeque<LocationChange>,
}

impl LocationHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let mut pending = VecDeque::new();
        pending.push_back(LocationChange {
            path: initial.clone(),
            kind: ChangeKind::Mount,
        });
        Self {
            entries: vec![initial],
            cursor: 0,
            pending,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.clone());
        self.cursor = self.entries.len() - 1;
        self.queue(path, ChangeKind::Push);
    }

    /// Overwrites the current entry; the entry count never changes.
    pub fn replace(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.entries[self.cursor] = path.clone();
        self.queue(path, ChangeKind::Replace);
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.queue(self.current().to_owned(), ChangeKind::Pop);
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        self.queue(self.current().to_owned(), ChangeKind::Pop);
        true
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn next_change(&mut self) -> Option<LocationChange> {
        self.pending.pop_front()
    }

    fn queue(&mut self, path: String, kind: ChangeKind) {
        trace!(path = %path, ?kind, "location change queued");
        self.pending.push_back(LocationChange { path, kind });
    }
}

impl Navigator for LocationHistory {
    fn replace(&mut self, path: &str) {
        LocationHistory::replace(self, path);
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeKind, LocationChange, LocationHistory};

    fn drain(history: &mut LocationHistory) -> Vec<LocationChange> {
        std::iter::from_fn(|| history.next_change()).collect()
    }

    #[test]
    fn mount_is_the_first_change() {
        let mut history = LocationHistory::new("/staking");
        assert_eq!(
            drain(&mut history),
            vec![LocationChange {
                path: "/staking".to_owned(),
                kind: ChangeKind::Mount,
            }]
        );
        assert!(!history.has_pending());
    }

    #[test]
    fn replace_does_not_add_entries() {
        let mut history = LocationHistory::new("/staking");
        history.push("/staking/q");
        history.replace("/staking/query");

        assert_eq!(history.entries(), &["/staking".to_owned(), "/staking/query".to_owned()]);
        assert_eq!(history.current(), "/staking/query");

        let kinds: Vec<ChangeKind> = drain(&mut history).into_iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::Mount, ChangeKind::Push, ChangeKind::Replace]);
    }

    #[test]
    fn back_and_forward_walk_entries() {
        let mut history = LocationHistory::new("/staking");
        history.push("/staking/query");
        drain(&mut history);

        assert!(history.back());
        assert_eq!(history.current(), "/staking");
        assert!(!history.back());
        assert!(history.forward());
        assert_eq!(history.current(), "/staking/query");
        assert!(!history.forward());

        let paths: Vec<String> = drain(&mut history).into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["/staking".to_owned(), "/staking/query".to_owned()]);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = LocationHistory::new("/a");
        history.push("/a/b");
        history.push("/a/c");
        history.back();
        history.push("/a/d");

        assert_eq!(
            history.entries(),
            &["/a".to_owned(), "/a/b".to_owned(), "/a/d".to_owned()]
        );
    }
}
