//! Right-sidebar editors bound to one slide: color, background image, layout

use super::{find_slide, selected_slide_id, PanelEditor};
use crate::{Document, EditorError, Mutation};
use formdeck_model::{Background, BackgroundKind, Layout, SlidePatch};
use formdeck_render::layout::{lookup, variants_for};

fn background_mutation(slide_id: &str, background: Background) -> Vec<Mutation> {
    vec![Mutation::UpdateSlide {
        id: slide_id.to_string(),
        patch: SlidePatch::background(background),
    }]
}

/// Solid background color and opacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideColorEditor {
    pub slide_id: String,
}

impl SlideColorEditor {
    pub fn new(slide_id: impl Into<String>) -> Self {
        Self {
            slide_id: slide_id.into(),
        }
    }

    pub fn for_selection(doc: &Document) -> Result<Self, EditorError> {
        Ok(Self::new(selected_slide_id(doc)?))
    }
}

impl PanelEditor for SlideColorEditor {
    type Staged = Background;

    fn description(&self) -> &'static str {
        "Change slide color"
    }

    fn stage(&self, doc: &Document) -> Result<Background, EditorError> {
        Ok(find_slide(doc, &self.slide_id)?.background.clone())
    }

    /// A color apply switches the slide to a plain color background
    fn mutations(
        &self,
        staged: &Background,
        committed: &Background,
    ) -> Result<Vec<Mutation>, EditorError> {
        if staged == committed {
            return Ok(Vec::new());
        }
        let mut background = staged.clone();
        background.kind = BackgroundKind::Color;
        background.image.clear();
        Ok(background_mutation(&self.slide_id, background))
    }
}

/// Background image URL and its placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImageEditor {
    pub slide_id: String,
}

impl BackgroundImageEditor {
    pub fn new(slide_id: impl Into<String>) -> Self {
        Self {
            slide_id: slide_id.into(),
        }
    }

    pub fn for_selection(doc: &Document) -> Result<Self, EditorError> {
        Ok(Self::new(selected_slide_id(doc)?))
    }
}

impl PanelEditor for BackgroundImageEditor {
    type Staged = Background;

    fn description(&self) -> &'static str {
        "Change background image"
    }

    fn stage(&self, doc: &Document) -> Result<Background, EditorError> {
        Ok(find_slide(doc, &self.slide_id)?.background.clone())
    }

    fn mutations(
        &self,
        staged: &Background,
        committed: &Background,
    ) -> Result<Vec<Mutation>, EditorError> {
        if staged == committed {
            return Ok(Vec::new());
        }
        let mut background = staged.clone();
        background.kind = if background.has_image() {
            BackgroundKind::Image
        } else {
            BackgroundKind::Color
        };
        Ok(background_mutation(&self.slide_id, background))
    }
}

/// Layout and variant picked in the layout panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChoice {
    pub layout: Layout,
    pub variant: String,
}

impl LayoutChoice {
    /// Switch layout, landing on its first variant
    pub fn choose_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        self.layout = layout;
        if let Some(first) = variants_for(layout).next() {
            self.variant = first.id.to_string();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEditor {
    pub slide_id: String,
}

impl LayoutEditor {
    pub fn new(slide_id: impl Into<String>) -> Self {
        Self {
            slide_id: slide_id.into(),
        }
    }

    pub fn for_selection(doc: &Document) -> Result<Self, EditorError> {
        Ok(Self::new(selected_slide_id(doc)?))
    }
}

impl PanelEditor for LayoutEditor {
    type Staged = LayoutChoice;

    fn description(&self) -> &'static str {
        "Change layout"
    }

    fn stage(&self, doc: &Document) -> Result<LayoutChoice, EditorError> {
        let slide = find_slide(doc, &self.slide_id)?;
        Ok(LayoutChoice {
            layout: slide.layout,
            variant: slide.variant.clone(),
        })
    }

    /// The staged pair must be one the layout table offers
    fn mutations(
        &self,
        staged: &LayoutChoice,
        committed: &LayoutChoice,
    ) -> Result<Vec<Mutation>, EditorError> {
        if staged == committed {
            return Ok(Vec::new());
        }
        lookup(staged.layout, &staged.variant)?;
        Ok(vec![Mutation::UpdateSlide {
            id: self.slide_id.clone(),
            patch: SlidePatch::layout(staged.layout, staged.variant.clone()),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::Panel;

    #[test]
    fn test_color_switches_kind() {
        let mut doc = Document::default();
        let mut panel = Panel::open(SlideColorEditor::new("question_1"), &doc).unwrap();
        {
            let background = panel.stage_mut().unwrap();
            background.color = "#3B82F6".to_string();
            background.opacity = 0.5;
        }
        panel.apply(&mut doc).unwrap();

        let background = &doc.form().find_slide("question_1").unwrap().background;
        assert_eq!(background.kind, BackgroundKind::Color);
        assert!(background.image.is_empty());
        assert_eq!(background.opacity, 0.5);
    }

    #[test]
    fn test_clearing_image_falls_back_to_color() {
        let mut doc = Document::default();
        let mut panel = Panel::open(BackgroundImageEditor::new("welcome"), &doc).unwrap();
        panel.stage_mut().unwrap().image.clear();
        panel.apply(&mut doc).unwrap();

        assert_eq!(doc.form().slides[0].background.kind, BackgroundKind::Color);
    }

    #[test]
    fn test_layout_validated() {
        let mut doc = Document::default();
        let mut panel = Panel::open(LayoutEditor::new("question_1"), &doc).unwrap();

        panel.stage_mut().unwrap().choose_layout(Layout::DividedLr);
        assert_eq!(panel.staged().unwrap().variant, "dlr-1");

        panel.stage_mut().unwrap().variant = "fw-2".to_string();
        assert!(matches!(panel.apply(&mut doc), Err(EditorError::Render(_))));
        assert_eq!(doc.form().slides[1].layout, Layout::FullWidth);

        panel.stage_mut().unwrap().variant = "dlr-2".to_string();
        assert_eq!(panel.apply(&mut doc).unwrap(), 1);
        assert_eq!(doc.form().slides[1].variant, "dlr-2");
    }
}
