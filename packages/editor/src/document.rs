//! # Document Handle
//!
//! The document store: one form, its editing focus, and its history.
//!
//! A Document can be:
//! - **Memory-backed**: temporary, for tests or scratch forms
//! - **File-backed**: loaded from and saved to a JSON file
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Mutate/Select → Project → Save
//!   ↓         ↓             ↓        ↓
//! JSON   Form+Selection   Canvas   JSON
//! ```
//!
//! Every change goes through [`Document::apply`], [`Document::select`],
//! [`Document::undo`], [`Document::redo`] or [`Document::reset`]. After a form
//! change the post-effects keep the selection valid, then observers are told.

use crate::mutations::{Mutation, MutationResult};
use crate::post_effects::PostEffectEngine;
use crate::selection::{transition, Selection, SelectionAction};
use crate::undo_stack::UndoStack;
use crate::EditorError;
use formdeck_model::Form;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Editable form document
pub struct Document {
    /// Path to the JSON file (if any)
    pub path: PathBuf,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,

    selection: Selection,
    history: UndoStack,
    effects: PostEffectEngine,
    observers: Vec<Box<dyn StoreObserver>>,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, temp docs)
    Memory { form: Form, dirty: bool },

    /// File-backed
    File { form: Form, dirty: bool },
}

impl DocumentStorage {
    fn form(&self) -> &Form {
        match self {
            DocumentStorage::Memory { form, .. } | DocumentStorage::File { form, .. } => form,
        }
    }

    fn form_mut(&mut self) -> &mut Form {
        match self {
            DocumentStorage::Memory { form, .. } | DocumentStorage::File { form, .. } => form,
        }
    }

    fn dirty(&self) -> bool {
        match self {
            DocumentStorage::Memory { dirty, .. } | DocumentStorage::File { dirty, .. } => *dirty,
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            DocumentStorage::Memory { dirty, .. } | DocumentStorage::File { dirty, .. } => {
                *dirty = true
            }
        }
    }
}

/// What kind of change an observer is being told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// A single mutation, by operation name
    Mutation(&'static str),
    /// A group of mutations applied as one undo step
    Batch { mutations: usize },
    Selection,
    Undo,
    Redo,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    /// Document version after the change
    pub version: u64,
    pub kind: ChangeKind,
    /// Whether the selection changed as part of this event
    pub selection_changed: bool,
}

/// Receives a notification after every successful change
pub trait StoreObserver {
    fn on_change(&mut self, event: &StoreEvent);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent),
{
    fn on_change(&mut self, event: &StoreEvent) {
        self(event)
    }
}

impl Document {
    /// Memory-backed document holding `form`, focused on its first visible slide
    pub fn from_form(path: PathBuf, form: Form) -> Self {
        let selection = Selection::for_form(&form);
        Self::with_storage(path, DocumentStorage::Memory { form, dirty: false }, selection)
    }

    /// Create document from JSON source (memory-backed)
    pub fn from_json(path: PathBuf, source: &str) -> Result<Self, EditorError> {
        Ok(Self::from_form(path, Form::from_json(source)?))
    }

    /// Load document from file (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(&path)?;
        let form = Form::from_json(&source)?;
        info!(path = %path.display(), slides = form.slides.len(), "Loaded form");

        let selection = Selection::for_form(&form);
        Ok(Self::with_storage(
            path,
            DocumentStorage::File { form, dirty: false },
            selection,
        ))
    }

    fn with_storage(path: PathBuf, storage: DocumentStorage, selection: Selection) -> Self {
        Self {
            path,
            version: 0,
            storage,
            selection,
            history: UndoStack::new(),
            effects: PostEffectEngine::new(),
            observers: Vec::new(),
        }
    }

    /// Replace the history with one keeping `levels` undo steps (0 = unlimited)
    pub fn with_undo_levels(mut self, levels: usize) -> Self {
        self.history = UndoStack::with_max_levels(levels);
        self
    }

    pub fn form(&self) -> &Form {
        self.storage.form()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn storage(&self) -> &DocumentStorage {
        &self.storage
    }

    /// Check if document has unsaved changes
    pub fn has_unsaved_changes(&self) -> bool {
        self.storage.dirty()
    }

    pub fn is_file_backed(&self) -> bool {
        matches!(self.storage, DocumentStorage::File { .. })
    }

    /// Register an observer for every later change
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply a mutation
    ///
    /// A rejected mutation changes nothing: not the form, the version, the
    /// history or the selection.
    #[instrument(skip(self, mutation), fields(op = mutation.name(), version = self.version))]
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let before = self.storage.form().clone();

        if let Err(e) = mutation.apply(self.storage.form_mut()) {
            warn!(error = %e, "Mutation rejected");
            return Err(e.into());
        }

        self.version += 1;
        self.storage.mark_dirty();
        let kind = ChangeKind::Mutation(mutation.name());
        self.history
            .record(mutation, before.clone(), self.storage.form().clone());

        let selection_changed = self
            .effects
            .repair(&before, self.storage.form(), &mut self.selection);
        debug!(selection_changed, "Mutation applied");

        self.notify(kind, selection_changed);
        Ok(MutationResult {
            version: self.version,
            selection_changed,
        })
    }

    /// Apply several mutations as one undo step
    ///
    /// All or nothing: if any mutation is rejected the form is restored to
    /// its state before the batch and the error is returned.
    #[instrument(skip(self, mutations), fields(count = mutations.len()))]
    pub fn apply_batch(
        &mut self,
        description: &str,
        mutations: Vec<Mutation>,
    ) -> Result<MutationResult, EditorError> {
        if mutations.is_empty() {
            return Ok(MutationResult {
                version: self.version,
                selection_changed: false,
            });
        }

        let before = self.storage.form().clone();
        let count = mutations.len();

        self.history.begin_batch(description);
        for mutation in mutations {
            let step_before = self.storage.form().clone();
            if let Err(e) = mutation.apply(self.storage.form_mut()) {
                warn!(error = %e, op = mutation.name(), "Batch rejected, rolling back");
                self.history.abort_batch();
                *self.storage.form_mut() = before;
                return Err(e.into());
            }
            self.history
                .record(mutation, step_before, self.storage.form().clone());
        }
        self.history.end_batch();

        self.version += count as u64;
        self.storage.mark_dirty();
        let selection_changed = self
            .effects
            .repair(&before, self.storage.form(), &mut self.selection);
        info!(description, version = self.version, "Batch applied");

        self.notify(ChangeKind::Batch { mutations: count }, selection_changed);
        Ok(MutationResult {
            version: self.version,
            selection_changed,
        })
    }

    /// Move the editing focus
    pub fn select(&mut self, action: SelectionAction) -> Result<(), EditorError> {
        let next = transition(&self.selection, self.storage.form(), &action)?;
        if next != self.selection {
            debug!(action = ?action, "Selection changed");
            self.selection = next;
            self.notify(ChangeKind::Selection, true);
        }
        Ok(())
    }

    /// Undo the most recent mutation or batch; false when history is empty
    pub fn undo(&mut self) -> bool {
        self.restore(ChangeKind::Undo)
    }

    /// Redo the most recently undone mutation or batch
    pub fn redo(&mut self) -> bool {
        self.restore(ChangeKind::Redo)
    }

    fn restore(&mut self, kind: ChangeKind) -> bool {
        let before = self.storage.form().clone();
        let restored = match kind {
            ChangeKind::Undo => self.history.undo(self.storage.form_mut()),
            _ => self.history.redo(self.storage.form_mut()),
        };
        if !restored {
            return false;
        }

        self.version += 1;
        self.storage.mark_dirty();
        let selection_changed = self
            .effects
            .repair(&before, self.storage.form(), &mut self.selection);
        debug!(kind = ?kind, version = self.version, "History restored");

        self.notify(kind, selection_changed);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Back to the starter form and initial focus; history is cleared
    pub fn reset(&mut self) {
        *self.storage.form_mut() = Form::default();
        self.selection = Selection::default();
        self.history.clear();
        self.version += 1;
        self.storage.mark_dirty();
        info!("Document reset");
        self.notify(ChangeKind::Reset, true);
    }

    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(self.storage.form().to_json()?)
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { form, dirty } => {
                std::fs::write(&self.path, form.to_json()?)?;
                *dirty = false;
                info!(path = %self.path.display(), "Saved form");
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }

    /// Write to `path` and keep the document file-backed there
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), EditorError> {
        let form = std::mem::replace(self.storage.form_mut(), Form::empty(""));
        self.storage = DocumentStorage::File { form, dirty: true };
        self.path = path;
        self.save()
    }

    fn notify(&mut self, kind: ChangeKind, selection_changed: bool) {
        let event = StoreEvent {
            version: self.version,
            kind,
            selection_changed,
        };
        for observer in &mut self.observers {
            observer.on_change(&event);
        }
    }
}

impl Default for Document {
    /// Memory-backed starter form
    fn default() -> Self {
        Self::with_storage(
            PathBuf::from("form.json"),
            DocumentStorage::Memory {
                form: Form::default(),
                dirty: false,
            },
            Selection::default(),
        )
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("path", &self.path)
            .field("version", &self.version)
            .field("storage", &self.storage)
            .field("selection", &self.selection)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}
