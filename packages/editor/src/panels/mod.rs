//! # Side-Panel Editors
//!
//! A panel stages a local copy of the part of the form it edits, reports
//! whether that copy differs from the committed form, and on `apply` turns the
//! difference into mutations applied as a single undo step.
//!
//! ```rust,ignore
//! let mut panel = Panel::open(TextEditor::for_selection(&doc)?, &doc)?;
//! if let Some(design) = panel.stage_mut() {
//!     design.font_size = Some("32px".to_string());
//! }
//! assert!(panel.has_changes());
//! panel.apply(&mut doc)?;
//! ```

mod content;
mod settings;
mod slide;
pub mod slide_list;

pub use content::{ButtonEditor, ContentDesign, ContentEditor, MediaEditor, QuestionEditor, TextEditor};
pub use settings::{FormSettingsEditor, SettingsDraft};
pub use slide::{BackgroundImageEditor, LayoutChoice, LayoutEditor, SlideColorEditor};

use crate::{Document, EditorError, Mutation, MutationError};
use formdeck_model::Slide;
use std::fmt;
use tracing::info;

/// Whether a staged copy differs from what is committed
pub fn has_pending_changes<T: PartialEq + ?Sized>(staged: &T, committed: &T) -> bool {
    staged != committed
}

/// One side panel's view of the form
pub trait PanelEditor {
    /// Local copy the user edits
    type Staged: Clone + PartialEq + fmt::Debug;

    /// Undo description for an apply
    fn description(&self) -> &'static str;

    /// Read the committed values this panel edits
    fn stage(&self, doc: &Document) -> Result<Self::Staged, EditorError>;

    /// Mutations that turn `committed` into `staged`, in application order
    fn mutations(
        &self,
        staged: &Self::Staged,
        committed: &Self::Staged,
    ) -> Result<Vec<Mutation>, EditorError>;
}

/// An open panel: the editor plus its staged and committed copies
#[derive(Debug)]
pub struct Panel<E: PanelEditor> {
    editor: E,
    committed: Option<E::Staged>,
    staged: Option<E::Staged>,
}

impl<E: PanelEditor> Panel<E> {
    /// Panel with nothing staged yet
    pub fn new(editor: E) -> Self {
        Self {
            editor,
            committed: None,
            staged: None,
        }
    }

    /// Open `editor` and stage the document's current values
    pub fn open(editor: E, doc: &Document) -> Result<Self, EditorError> {
        let mut panel = Self::new(editor);
        panel.refresh(doc)?;
        Ok(panel)
    }

    /// Re-read committed values, dropping local edits
    pub fn refresh(&mut self, doc: &Document) -> Result<(), EditorError> {
        let staged = self.editor.stage(doc)?;
        self.committed = Some(staged.clone());
        self.staged = Some(staged);
        Ok(())
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn staged(&self) -> Option<&E::Staged> {
        self.staged.as_ref()
    }

    pub fn stage_mut(&mut self) -> Option<&mut E::Staged> {
        self.staged.as_mut()
    }

    pub fn has_changes(&self) -> bool {
        match (&self.staged, &self.committed) {
            (Some(staged), Some(committed)) => has_pending_changes(staged, committed),
            _ => false,
        }
    }

    /// Throw away local edits
    pub fn discard(&mut self) {
        self.staged = self.committed.clone();
    }

    /// Commit local edits as one undo step and re-stage; returns the number
    /// of mutations issued
    pub fn apply(&mut self, doc: &mut Document) -> Result<usize, EditorError> {
        let (Some(staged), Some(committed)) = (&self.staged, &self.committed) else {
            return Err(EditorError::NothingStaged);
        };

        let mutations = self.editor.mutations(staged, committed)?;
        let count = mutations.len();
        if count > 0 {
            doc.apply_batch(self.editor.description(), mutations)?;
            info!(panel = self.editor.description(), mutations = count, "Panel applied");
        }

        self.refresh(doc)?;
        Ok(count)
    }
}

/// Slide a panel is bound to, taken from the current selection
fn selected_slide_id(doc: &Document) -> Result<String, EditorError> {
    doc.selection()
        .slide_id()
        .map(str::to_string)
        .ok_or(EditorError::NothingStaged)
}

fn find_slide<'a>(doc: &'a Document, id: &str) -> Result<&'a Slide, EditorError> {
    doc.form()
        .find_slide(id)
        .ok_or_else(|| EditorError::from(MutationError::slide(id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_pending_changes() {
        assert!(!has_pending_changes("a", "a"));
        assert!(has_pending_changes(&vec![1, 2], &vec![2, 1]));
    }

    #[test]
    fn test_apply_without_stage() {
        let mut doc = Document::default();
        let mut panel = Panel::new(SlideColorEditor::new("welcome"));
        assert!(!panel.has_changes());
        assert!(matches!(panel.apply(&mut doc), Err(EditorError::NothingStaged)));
    }
}
