//! Editors for the selected content item's design

use super::PanelEditor;
use crate::{Document, EditorError, Mutation, MutationError};
use formdeck_model::{
    ButtonDesign, ButtonDesignPatch, ContentItem, ContentKind, MediaDesign, MediaDesignPatch,
    QuestionDesign, QuestionDesignPatch, TextDesign, TextDesignPatch,
};
use std::fmt;
use std::marker::PhantomData;

/// A design type a content panel can edit
pub trait ContentDesign: Clone + PartialEq + fmt::Debug {
    type Patch;

    const KIND: ContentKind;
    const DESCRIPTION: &'static str;

    fn of(item: &ContentItem) -> Option<&Self>;

    /// Field patches turning `committed` into `self`
    fn changes(&self, committed: &Self) -> Vec<Self::Patch>;

    fn mutation(slide_id: String, content_id: String, patch: Self::Patch) -> Mutation;
}

impl ContentDesign for TextDesign {
    type Patch = TextDesignPatch;
    const KIND: ContentKind = ContentKind::Text;
    const DESCRIPTION: &'static str = "Edit text";

    fn of(item: &ContentItem) -> Option<&Self> {
        item.text_design()
    }

    fn changes(&self, committed: &Self) -> Vec<Self::Patch> {
        self.changes_from(committed)
    }

    fn mutation(slide_id: String, content_id: String, patch: Self::Patch) -> Mutation {
        Mutation::UpdateTextDesign {
            slide_id,
            content_id,
            patch,
        }
    }
}

impl ContentDesign for MediaDesign {
    type Patch = MediaDesignPatch;
    const KIND: ContentKind = ContentKind::Media;
    const DESCRIPTION: &'static str = "Edit media";

    fn of(item: &ContentItem) -> Option<&Self> {
        item.media_design()
    }

    fn changes(&self, committed: &Self) -> Vec<Self::Patch> {
        self.changes_from(committed)
    }

    fn mutation(slide_id: String, content_id: String, patch: Self::Patch) -> Mutation {
        Mutation::UpdateMediaDesign {
            slide_id,
            content_id,
            patch,
        }
    }
}

impl ContentDesign for ButtonDesign {
    type Patch = ButtonDesignPatch;
    const KIND: ContentKind = ContentKind::Button;
    const DESCRIPTION: &'static str = "Edit button";

    fn of(item: &ContentItem) -> Option<&Self> {
        item.button_design()
    }

    fn changes(&self, committed: &Self) -> Vec<Self::Patch> {
        self.changes_from(committed)
    }

    fn mutation(slide_id: String, content_id: String, patch: Self::Patch) -> Mutation {
        Mutation::UpdateButtonDesign {
            slide_id,
            content_id,
            patch,
        }
    }
}

impl ContentDesign for QuestionDesign {
    type Patch = QuestionDesignPatch;
    const KIND: ContentKind = ContentKind::Question;
    const DESCRIPTION: &'static str = "Edit question";

    fn of(item: &ContentItem) -> Option<&Self> {
        item.question_design()
    }

    fn changes(&self, committed: &Self) -> Vec<Self::Patch> {
        self.changes_from(committed)
    }

    fn mutation(slide_id: String, content_id: String, patch: Self::Patch) -> Mutation {
        Mutation::UpdateQuestionDesign {
            slide_id,
            content_id,
            patch,
        }
    }
}

/// Edits the design of one content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEditor<D> {
    pub slide_id: String,
    pub content_id: String,
    design: PhantomData<D>,
}

pub type TextEditor = ContentEditor<TextDesign>;
pub type MediaEditor = ContentEditor<MediaDesign>;
pub type ButtonEditor = ContentEditor<ButtonDesign>;
pub type QuestionEditor = ContentEditor<QuestionDesign>;

impl<D: ContentDesign> ContentEditor<D> {
    pub fn new(slide_id: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            slide_id: slide_id.into(),
            content_id: content_id.into(),
            design: PhantomData,
        }
    }

    /// Bind to the selected content item
    pub fn for_selection(doc: &Document) -> Result<Self, EditorError> {
        let selection = doc.selection();
        match (selection.slide_id(), selection.content_id()) {
            (Some(slide_id), Some(content_id)) => Ok(Self::new(slide_id, content_id)),
            _ => Err(EditorError::NothingStaged),
        }
    }
}

impl<D: ContentDesign> PanelEditor for ContentEditor<D> {
    type Staged = D;

    fn description(&self) -> &'static str {
        D::DESCRIPTION
    }

    fn stage(&self, doc: &Document) -> Result<D, EditorError> {
        let slide = super::find_slide(doc, &self.slide_id)?;
        let item = slide
            .find_content(&self.content_id)
            .ok_or_else(|| MutationError::content(&self.slide_id, &self.content_id))?;

        D::of(item).cloned().ok_or_else(|| {
            EditorError::from(MutationError::TypeMismatch {
                content_id: self.content_id.clone(),
                expected: D::KIND,
                found: item.kind(),
            })
        })
    }

    fn mutations(&self, staged: &D, committed: &D) -> Result<Vec<Mutation>, EditorError> {
        Ok(staged
            .changes(committed)
            .into_iter()
            .map(|patch| D::mutation(self.slide_id.clone(), self.content_id.clone(), patch))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Panel;
    use crate::selection::SelectionAction;

    #[test]
    fn test_text_editor_round() {
        let mut doc = Document::default();
        doc.select(SelectionAction::SelectContent("text_1".to_string()))
            .unwrap();

        let mut panel = Panel::open(TextEditor::for_selection(&doc).unwrap(), &doc).unwrap();
        assert!(!panel.has_changes());

        let design = panel.stage_mut().unwrap();
        design.font_size = Some("50px".to_string());
        design.font_color = Some("#111111".to_string());
        assert!(panel.has_changes());

        assert_eq!(panel.apply(&mut doc).unwrap(), 2);
        assert!(!panel.has_changes());
        assert_eq!(doc.history().undo_levels(), 1);

        let item = doc.form().slides[0].find_content("text_1").unwrap();
        assert_eq!(item.text_design().unwrap().font_size.as_deref(), Some("50px"));
    }

    #[test]
    fn test_cleared_field_is_committed() {
        let mut doc = Document::default();
        let mut panel = Panel::open(TextEditor::new("welcome", "text_1"), &doc).unwrap();

        panel.stage_mut().unwrap().font_size = None;
        assert!(panel.has_changes());

        assert_eq!(panel.apply(&mut doc).unwrap(), 1);
        assert!(!panel.has_changes());

        let design = doc.form().slides[0]
            .find_content("text_1")
            .unwrap()
            .text_design()
            .unwrap();
        assert_eq!(design.font_size, None);
        assert_eq!(design.font_color.as_deref(), Some("#000000"));

        assert!(doc.undo());
        let restored = doc.form().slides[0].find_content("text_1").unwrap();
        assert_eq!(
            restored.text_design().unwrap().font_size.as_deref(),
            Some("45px")
        );
    }

    #[test]
    fn test_wrong_kind() {
        let doc = Document::default();
        let err = Panel::open(ButtonEditor::new("welcome", "text_1"), &doc).unwrap_err();
        assert!(matches!(
            err,
            EditorError::Mutation(MutationError::TypeMismatch {
                expected: ContentKind::Button,
                found: ContentKind::Text,
                ..
            })
        ));
    }

    #[test]
    fn test_requires_content_selection() {
        let doc = Document::default();
        assert!(matches!(
            QuestionEditor::for_selection(&doc),
            Err(EditorError::NothingStaged)
        ));
    }
}
