//! # Post-Effect System
//!
//! Form changes can leave the selection pointing at something that is gone.
//! After every mutation, undo or redo the store runs each registered effect
//! over the old and new form and applies the selection repairs they return.
//!
//! Effects only fire when the selection has actually become invalid, so a
//! selection pointing at an unaffected slide is left exactly as it was.
//!
//! Post-effects are:
//! - **Deterministic**: the same forms and selection give the same repairs
//! - **Minimal**: no repair unless the selected target is missing or hidden

use crate::selection::{transition, Selection, SelectionAction};
use formdeck_model::Form;
use tracing::{debug, warn};

/// Post-effect that can be triggered by a form change
pub trait PostEffect: std::fmt::Debug {
    /// Inspect the change and return a selection repair if one is needed
    fn analyze(&self, before: &Form, after: &Form, selection: &Selection) -> Option<SelectionAction>;
}

/// Keep the selected slide pointing at an existing, visible slide
///
/// The replacement is the next visible slide after the old position, else
/// the nearest visible slide before it, else nothing.
#[derive(Debug)]
pub struct ReselectVisibleSlide;

impl PostEffect for ReselectVisibleSlide {
    fn analyze(&self, before: &Form, after: &Form, selection: &Selection) -> Option<SelectionAction> {
        let selected = selection.slide_id()?;
        if is_visible(after, selected) {
            return None;
        }

        let replacement = match before.slide_index(selected) {
            Some(index) => {
                let following = before.slides[index + 1..].iter();
                let preceding = before.slides[..index].iter().rev();
                following
                    .chain(preceding)
                    .map(|slide| slide.id.as_str())
                    .find(|id| is_visible(after, id))
                    .or_else(|| first_visible(after))
            }
            None => first_visible(after),
        };

        Some(SelectionAction::SelectSlide(replacement.map(str::to_string)))
    }
}

/// Drop a content selection whose item no longer exists on the selected slide
#[derive(Debug)]
pub struct ClearMissingContent;

impl PostEffect for ClearMissingContent {
    fn analyze(&self, _before: &Form, after: &Form, selection: &Selection) -> Option<SelectionAction> {
        let content_id = selection.content_id()?;
        let present = selection
            .slide_id()
            .and_then(|slide_id| after.find_slide(slide_id))
            .map(|slide| slide.find_content(content_id).is_some())
            .unwrap_or(false);

        if present {
            None
        } else {
            Some(SelectionAction::DeselectContent)
        }
    }
}

fn is_visible(form: &Form, id: &str) -> bool {
    form.find_slide(id).map(|slide| slide.visible).unwrap_or(false)
}

fn first_visible(form: &Form) -> Option<&str> {
    form.slides
        .iter()
        .find(|slide| slide.visible)
        .map(|slide| slide.id.as_str())
}

/// Post-effect engine that applies all registered effects
#[derive(Debug)]
pub struct PostEffectEngine {
    effects: Vec<Box<dyn PostEffect>>,
}

impl PostEffectEngine {
    /// Create engine with default effects
    pub fn new() -> Self {
        Self {
            effects: vec![Box::new(ReselectVisibleSlide), Box::new(ClearMissingContent)],
        }
    }

    /// Engine without any effects
    pub fn empty() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    pub fn register(&mut self, effect: Box<dyn PostEffect>) {
        self.effects.push(effect);
    }

    /// Repairs each effect asks for, in registration order
    pub fn analyze(&self, before: &Form, after: &Form, selection: &Selection) -> Vec<SelectionAction> {
        self.effects
            .iter()
            .filter_map(|effect| effect.analyze(before, after, selection))
            .collect()
    }

    /// Run every effect against `selection` in turn; true when it changed
    pub fn repair(&self, before: &Form, after: &Form, selection: &mut Selection) -> bool {
        let mut changed = false;

        for effect in &self.effects {
            let Some(action) = effect.analyze(before, after, selection) else {
                continue;
            };

            match transition(selection, after, &action) {
                Ok(next) => {
                    debug!(effect = ?effect, action = ?action, "Repairing selection");
                    changed |= next != *selection;
                    *selection = next;
                }
                Err(e) => warn!(error = %e, "Selection repair rejected"),
            }
        }

        changed
    }
}

impl Default for PostEffectEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selecting(slide: &str) -> Selection {
        Selection {
            selected_slide_id: Some(slide.to_string()),
            ..Selection::default()
        }
    }

    #[test]
    fn test_delete_selects_next_visible() {
        let before = Form::default();
        let mut after = before.clone();
        after.slides.retain(|s| s.id != "question_1");

        // result is hidden, so thankyou is next
        let mut selection = selecting("question_1");
        assert!(PostEffectEngine::new().repair(&before, &after, &mut selection));
        assert_eq!(selection.slide_id(), Some("thankyou"));
    }

    #[test]
    fn test_falls_back_to_previous() {
        let before = Form::default();
        let mut after = before.clone();
        after.slides.retain(|s| s.id != "thankyou");

        let mut selection = selecting("thankyou");
        PostEffectEngine::new().repair(&before, &after, &mut selection);
        assert_eq!(selection.slide_id(), Some("question_1"));
    }

    #[test]
    fn test_nothing_left() {
        let before = Form::default();
        let mut after = before.clone();
        after.slides.clear();

        let mut selection = selecting("welcome");
        PostEffectEngine::new().repair(&before, &after, &mut selection);
        assert_eq!(selection.slide_id(), None);
    }

    #[test]
    fn test_unaffected_selection_is_untouched() {
        let before = Form::default();
        let mut after = before.clone();
        after.slides.retain(|s| s.id != "question_1");

        let mut selection = selecting("welcome");
        selection.selected_content_id = Some("text_1".to_string());
        let snapshot = selection.clone();

        assert!(!PostEffectEngine::new().repair(&before, &after, &mut selection));
        assert_eq!(selection, snapshot);
    }

    #[test]
    fn test_missing_content_is_cleared() {
        let before = Form::default();
        let mut after = before.clone();
        after.slides[0].content.retain(|c| c.id != "text_1");

        let mut selection = selecting("welcome");
        selection.selected_content_id = Some("text_1".to_string());

        let actions = PostEffectEngine::new().analyze(&before, &after, &selection);
        assert_eq!(actions, vec![SelectionAction::DeselectContent]);
    }
}
