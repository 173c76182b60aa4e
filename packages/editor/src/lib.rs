//! # formdeck editor
//!
//! Editing engine for formdeck forms.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ panels: staged copies → batched mutations   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document store                      │
//! │  - Validate and apply mutations             │
//! │  - Undo/redo with form snapshots            │
//! │  - Selection transitions and repair         │
//! │  - Notify observers on every change         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: Form + Selection → VirtualCanvas    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Form is source of truth**: the canvas is a derived view
//! 2. **Mutations are all-or-nothing**: a rejected mutation leaves the form untouched
//! 3. **Selection follows the form**: deleting or hiding the selected slide moves it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formdeck_editor::{Document, Mutation, SelectionAction};
//! use formdeck_model::SlidePatch;
//!
//! let mut doc = Document::load("form.json".into())?;
//! doc.select(SelectionAction::SelectSlide(Some("question_1".to_string())))?;
//!
//! doc.apply(Mutation::UpdateSlide {
//!     id: "question_1".to_string(),
//!     patch: SlidePatch::name("About you"),
//! })?;
//! doc.undo();
//!
//! doc.save()?;
//! ```

pub mod audit;
mod document;
mod errors;
mod mutations;
pub mod panels;
mod pipeline;
mod post_effects;
pub mod selection;
mod undo_stack;
pub mod validation;

pub use audit::{audit_form, Diagnostic, DiagnosticLevel};
pub use document::{ChangeKind, Document, DocumentStorage, StoreEvent, StoreObserver};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult, Target};
pub use pipeline::{Pipeline, PipelineResult};
pub use post_effects::{ClearMissingContent, PostEffect, PostEffectEngine, ReselectVisibleSlide};
pub use selection::{transition, RightPanel, Selection, SelectionAction, SelectionError, SelectionState};
pub use undo_stack::{MutationBatch, UndoStack};
pub use validation::{validate_answer, ValidationError};

// Re-export the document model for convenience
pub use formdeck_model as model;
