use crate::form::Form;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Panel shown in the right sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightPanel {
    #[default]
    AddSlide,
    SlideColor,
    BackgroundImage,
    ChangeLayout,
    FormSettings,
}

impl RightPanel {
    pub fn as_str(self) -> &'static str {
        match self {
            RightPanel::AddSlide => "add_slide",
            RightPanel::SlideColor => "slide_color",
            RightPanel::BackgroundImage => "background_image",
            RightPanel::ChangeLayout => "change_layout",
            RightPanel::FormSettings => "form_settings",
        }
    }
}

impl fmt::Display for RightPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editing focus; transient and never stored with the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selected_slide_id: Option<String>,
    pub selected_content_id: Option<String>,
    pub active_right_panel: RightPanel,
    pub left_sidebar_open: bool,
    pub right_sidebar_open: bool,
}

impl Default for Selection {
    /// Focus of the starter form: the welcome slide with the add-slide panel open
    fn default() -> Self {
        Self {
            selected_slide_id: Some("welcome".to_string()),
            selected_content_id: None,
            active_right_panel: RightPanel::AddSlide,
            left_sidebar_open: false,
            right_sidebar_open: true,
        }
    }
}

impl Selection {
    /// Nothing selected, right sidebar open
    pub fn empty() -> Self {
        Self {
            selected_slide_id: None,
            ..Default::default()
        }
    }

    /// Selects the first visible slide of `form`
    pub fn for_form(form: &Form) -> Self {
        Self {
            selected_slide_id: form
                .slides
                .iter()
                .find(|slide| slide.visible)
                .map(|slide| slide.id.clone()),
            ..Self::empty()
        }
    }

    pub fn slide_id(&self) -> Option<&str> {
        self.selected_slide_id.as_deref()
    }

    pub fn content_id(&self) -> Option<&str> {
        self.selected_content_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::{Slide, SlideKind};

    #[test]
    fn test_initial_selection() {
        let selection = Selection::default();
        assert_eq!(selection.slide_id(), Some("welcome"));
        assert_eq!(selection.active_right_panel, RightPanel::AddSlide);
        assert!(selection.right_sidebar_open);
        assert!(!selection.left_sidebar_open);
    }

    #[test]
    fn test_for_form_skips_hidden_slides() {
        let mut form = Form::empty("blank");
        form.slides
            .push(Slide::new("intro", "Intro", SlideKind::Welcome).hidden());
        form.slides
            .push(Slide::new("question_1", "Question_1", SlideKind::Question));

        assert_eq!(Selection::for_form(&form).slide_id(), Some("question_1"));
        assert_eq!(Selection::for_form(&Form::empty("blank")).slide_id(), None);
    }

    #[test]
    fn test_panel_wire_names() {
        let json = serde_json::to_value(RightPanel::ChangeLayout).unwrap();
        assert_eq!(json, "change_layout");
        assert_eq!(RightPanel::FormSettings.to_string(), "form_settings");
    }
}
