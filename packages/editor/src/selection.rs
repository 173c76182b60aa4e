//! # Selection
//!
//! Editing focus over a form: which slide and content item are active and
//! which sidebar is showing. Transitions are pure functions of
//! `(selection, form, action)` and reject targets that do not exist, leaving
//! the previous selection in place.
//!
//! ```text
//! NoSlideSelected ──SelectSlide──▶ SlideSelected ──SelectContent──▶ SlideAndContentSelected
//!        ▲                              │   ▲                                 │
//!        └────────SelectSlide(None)─────┘   └──ClickBackground / SelectSlide──┘
//! ```
//!
//! The left sidebar edits content; the right sidebar hosts slide and form
//! panels. Opening one side closes the other.

pub use formdeck_model::{RightPanel, Selection};

use formdeck_model::Form;
use thiserror::Error;

/// Where the editing focus is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState<'a> {
    NoSlideSelected,
    SlideSelected(&'a str),
    SlideAndContentSelected(&'a str, &'a str),
}

impl<'a> SelectionState<'a> {
    pub fn of(selection: &'a Selection) -> Self {
        match (selection.slide_id(), selection.content_id()) {
            (Some(slide), Some(content)) => SelectionState::SlideAndContentSelected(slide, content),
            (Some(slide), None) => SelectionState::SlideSelected(slide),
            (None, _) => SelectionState::NoSlideSelected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Focus a slide and drop any content focus; `None` clears both
    SelectSlide(Option<String>),
    /// Focus an item on the selected slide and open its editor
    SelectContent(String),
    /// Drop content focus, keeping the sidebars as they are
    DeselectContent,
    /// Click on the slide body outside any item
    ClickBackground,
    SetRightPanel(RightPanel),
    OpenLeftSidebar,
    OpenRightSidebar,
    CloseLeftSidebar,
    CloseRightSidebar,
    ToggleLeftSidebar,
    ToggleRightSidebar,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Slide not found: {0}")]
    SlideNotFound(String),

    #[error("Slide {0} is hidden")]
    SlideHidden(String),

    #[error("No slide is selected")]
    NoSlideSelected,

    #[error("Content {content_id} not found on slide {slide_id}")]
    ContentNotFound { slide_id: String, content_id: String },
}

/// Selection after `action`, or the reason it is not allowed
pub fn transition(
    selection: &Selection,
    form: &Form,
    action: &SelectionAction,
) -> Result<Selection, SelectionError> {
    let mut next = selection.clone();

    match action {
        SelectionAction::SelectSlide(None) => {
            next.selected_slide_id = None;
            next.selected_content_id = None;
        }

        SelectionAction::SelectSlide(Some(id)) => {
            let slide = form
                .find_slide(id)
                .ok_or_else(|| SelectionError::SlideNotFound(id.clone()))?;
            if !slide.visible {
                return Err(SelectionError::SlideHidden(id.clone()));
            }
            next.selected_slide_id = Some(id.clone());
            next.selected_content_id = None;
        }

        SelectionAction::SelectContent(content_id) => {
            let slide_id = selection
                .slide_id()
                .ok_or(SelectionError::NoSlideSelected)?;
            let contains = form
                .find_slide(slide_id)
                .map(|slide| slide.find_content(content_id).is_some())
                .unwrap_or(false);
            if !contains {
                return Err(SelectionError::ContentNotFound {
                    slide_id: slide_id.to_string(),
                    content_id: content_id.clone(),
                });
            }
            next.selected_content_id = Some(content_id.clone());
            show_left(&mut next);
        }

        SelectionAction::DeselectContent => {
            next.selected_content_id = None;
        }

        SelectionAction::ClickBackground => {
            next.selected_content_id = None;
            show_right(&mut next);
        }

        SelectionAction::SetRightPanel(panel) => {
            next.active_right_panel = *panel;
            show_right(&mut next);
        }

        SelectionAction::OpenLeftSidebar => show_left(&mut next),
        SelectionAction::OpenRightSidebar => show_right(&mut next),
        SelectionAction::CloseLeftSidebar => next.left_sidebar_open = false,
        SelectionAction::CloseRightSidebar => next.right_sidebar_open = false,

        SelectionAction::ToggleLeftSidebar => {
            if next.left_sidebar_open {
                next.left_sidebar_open = false;
            } else {
                show_left(&mut next);
            }
        }

        SelectionAction::ToggleRightSidebar => {
            if next.right_sidebar_open {
                next.right_sidebar_open = false;
            } else {
                show_right(&mut next);
            }
        }
    }

    Ok(next)
}

fn show_left(selection: &mut Selection) {
    selection.left_sidebar_open = true;
    selection.right_sidebar_open = false;
}

fn show_right(selection: &mut Selection) {
    selection.right_sidebar_open = true;
    selection.left_sidebar_open = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(selection: &Selection, action: SelectionAction) -> Selection {
        transition(selection, &Form::default(), &action).unwrap()
    }

    #[test]
    fn test_states() {
        let mut selection = Selection::default();
        assert_eq!(
            SelectionState::of(&selection),
            SelectionState::SlideSelected("welcome")
        );

        selection = apply(&selection, SelectionAction::SelectContent("text_1".to_string()));
        assert_eq!(
            SelectionState::of(&selection),
            SelectionState::SlideAndContentSelected("welcome", "text_1")
        );

        selection = apply(&selection, SelectionAction::SelectSlide(None));
        assert_eq!(SelectionState::of(&selection), SelectionState::NoSlideSelected);
    }

    #[test]
    fn test_select_slide_clears_content() {
        let selection = apply(
            &Selection::default(),
            SelectionAction::SelectContent("button_1".to_string()),
        );
        let selection = apply(&selection, SelectionAction::SelectSlide(Some("question_1".to_string())));
        assert_eq!(selection.slide_id(), Some("question_1"));
        assert_eq!(selection.content_id(), None);
    }

    #[test]
    fn test_content_opens_left_and_background_opens_right() {
        let selection = apply(
            &Selection::default(),
            SelectionAction::SelectContent("text_2".to_string()),
        );
        assert!(selection.left_sidebar_open);
        assert!(!selection.right_sidebar_open);

        let selection = apply(&selection, SelectionAction::ClickBackground);
        assert_eq!(selection.content_id(), None);
        assert!(!selection.left_sidebar_open);
        assert!(selection.right_sidebar_open);
    }

    #[test]
    fn test_right_panel_closes_left() {
        let selection = apply(&Selection::default(), SelectionAction::OpenLeftSidebar);
        let selection = apply(&selection, SelectionAction::SetRightPanel(RightPanel::ChangeLayout));
        assert_eq!(selection.active_right_panel, RightPanel::ChangeLayout);
        assert!(selection.right_sidebar_open);
        assert!(!selection.left_sidebar_open);

        let selection = apply(&selection, SelectionAction::ToggleRightSidebar);
        assert!(!selection.right_sidebar_open);
        let selection = apply(&selection, SelectionAction::ToggleLeftSidebar);
        assert!(selection.left_sidebar_open);
    }

    #[test]
    fn test_invalid_targets() {
        let form = Form::default();
        let selection = Selection::default();

        assert_eq!(
            transition(&selection, &form, &SelectionAction::SelectSlide(Some("nope".to_string()))),
            Err(SelectionError::SlideNotFound("nope".to_string()))
        );
        assert_eq!(
            transition(&selection, &form, &SelectionAction::SelectSlide(Some("result".to_string()))),
            Err(SelectionError::SlideHidden("result".to_string()))
        );
        assert_eq!(
            transition(&selection, &form, &SelectionAction::SelectContent("question_1".to_string())),
            Err(SelectionError::ContentNotFound {
                slide_id: "welcome".to_string(),
                content_id: "question_1".to_string(),
            })
        );
        assert_eq!(
            transition(&Selection::empty(), &form, &SelectionAction::SelectContent("text_1".to_string())),
            Err(SelectionError::NoSlideSelected)
        );
    }
}
