//! # Form history
//!
//! Snapshot-based: every history entry stores the whole form as it was
//! before its first mutation and after its last one, so stepping back or
//! forward is a single assignment and never replays mutations.
//!
//! An entry usually holds one mutation. Between `begin_batch` and
//! `end_batch` every recorded mutation joins the same entry, which is then
//! undone and redone as one step. Recording outside a batch discards the
//! redo side.

use crate::Mutation;
use formdeck_model::Form;
use std::collections::VecDeque;

const DEFAULT_LEVELS: usize = 100;

/// One undo step
#[derive(Debug, Clone)]
pub struct MutationBatch {
    pub mutations: Vec<Mutation>,
    pub before: Form,
    pub after: Form,
    pub description: Option<String>,
}

impl MutationBatch {
    pub fn single(mutation: Mutation, before: Form, after: Form) -> Self {
        Self {
            mutations: vec![mutation],
            before,
            after,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn extend(&mut self, mutation: Mutation, after: Form) {
        self.mutations.push(mutation);
        self.after = after;
    }
}

#[derive(Debug)]
pub struct UndoStack {
    past: VecDeque<MutationBatch>,
    future: Vec<MutationBatch>,
    /// 0 keeps everything
    max_levels: usize,
    open: Option<OpenBatch>,
}

#[derive(Debug)]
struct OpenBatch {
    description: Option<String>,
    entry: Option<MutationBatch>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            max_levels,
            open: None,
        }
    }

    /// Record a mutation that has already been applied to the form
    pub fn record(&mut self, mutation: Mutation, before: Form, after: Form) {
        let Some(open) = &mut self.open else {
            self.push(MutationBatch::single(mutation, before, after));
            return;
        };
        match &mut open.entry {
            Some(entry) => entry.extend(mutation, after),
            None => open.entry = Some(MutationBatch::single(mutation, before, after)),
        }
    }

    /// Group the following mutations into one step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.open = Some(OpenBatch {
            description: Some(description.into()),
            entry: None,
        });
    }

    /// Close the open batch; an empty batch leaves no entry
    pub fn end_batch(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        if let Some(mut entry) = open.entry {
            entry.description = open.description;
            self.push(entry);
        }
    }

    /// Discard the open batch and hand back the form it started from
    pub fn abort_batch(&mut self) -> Option<Form> {
        self.open
            .take()
            .and_then(|open| open.entry)
            .map(|entry| entry.before)
    }

    pub fn is_batching(&self) -> bool {
        self.open.is_some()
    }

    fn push(&mut self, entry: MutationBatch) {
        self.past.push_back(entry);
        if self.max_levels > 0 {
            while self.past.len() > self.max_levels {
                self.past.pop_front();
            }
        }
        self.future.clear();
    }

    /// Restore the form from before the latest entry
    pub fn undo(&mut self, form: &mut Form) -> bool {
        let Some(entry) = self.past.pop_back() else {
            return false;
        };
        form.clone_from(&entry.before);
        self.future.push(entry);
        true
    }

    /// Restore the form from after the latest undone entry
    pub fn redo(&mut self, form: &mut Form) -> bool {
        let Some(entry) = self.future.pop() else {
            return false;
        };
        form.clone_from(&entry.after);
        self.past.push_back(entry);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.open = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.past.back()?.description.as_deref()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.future.last()?.description.as_deref()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
