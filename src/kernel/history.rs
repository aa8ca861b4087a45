//! Snapshot timeline: past / present / future.
//!
//! Every recorded edit clones the present document onto the past stack and
//! discards the redo trail, so an edit after undo branches the history the
//! way a fresh edit would. Past and future entries are full value snapshots;
//! nothing in them aliases the live document.

use std::collections::VecDeque;

use crate::models::Document;

pub struct History {
    /// Previous snapshots, oldest first.
    past: Vec<Document>,
    present: Document,
    /// Snapshots undone from, front = next redo.
    future: VecDeque<Document>,
    max_depth: usize,
}

impl History {
    pub fn new(present: Document, max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: VecDeque::new(),
            max_depth,
        }
    }

    pub fn present(&self) -> &Document {
        &self.present
    }

    /// Direct access for cosmetic edits that skip the snapshot protocol
    /// (local-image bookkeeping).
    pub(crate) fn present_mut(&mut self) -> &mut Document {
        &mut self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Snapshot the present, drop the redo trail, then apply `edit`.
    pub fn record<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Document),
    {
        self.past.push(self.present.clone());
        if self.past.len() > self.max_depth {
            self.past.remove(0);
        }
        self.future.clear();
        edit(&mut self.present);
    }

    /// Step back one snapshot. No-op on empty past.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push_front(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. No-op on empty future.
    pub fn redo(&mut self) -> bool {
        match self.future.pop_front() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    /// Drop everything and restart from `initial`.
    pub fn reset(&mut self, initial: Document) {
        self.past.clear();
        self.future.clear();
        self.present = initial;
    }

    /// Drop the redo trail only. Called after a successful save commit so
    /// redo cannot resurrect pre-save edits behind the new baseline.
    pub fn clear_future(&mut self) {
        self.future.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/history.rs"]
mod tests;
