use crate::content::ContentItem;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One page of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default = "default_variant")]
    pub variant: String,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

fn default_visible() -> bool {
    true
}

fn default_variant() -> String {
    "fw-1".to_string()
}

impl Slide {
    /// Visible, full-width/fw-1 slide with a white background and no content
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SlideKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            visible: true,
            layout: Layout::FullWidth,
            variant: default_variant(),
            background: Background::default(),
            content: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_content(mut self, item: ContentItem) -> Self {
        self.content.push(item);
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_layout(mut self, layout: Layout, variant: impl Into<String>) -> Self {
        self.layout = layout;
        self.variant = variant.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn find_content(&self, id: &str) -> Option<&ContentItem> {
        self.content.iter().find(|item| item.id == id)
    }

    pub fn find_content_mut(&mut self, id: &str) -> Option<&mut ContentItem> {
        self.content.iter_mut().find(|item| item.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Welcome,
    Question,
    Result,
    Thankyou,
}

impl SlideKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideKind::Welcome => "welcome",
            SlideKind::Question => "question",
            SlideKind::Result => "result",
            SlideKind::Thankyou => "thankyou",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural arrangement family; the variant string picks within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    FullWidth,
    DividedLr,
    BoxedFull,
    BoxedLr,
    BoxedUd,
}

impl Layout {
    pub const ALL: [Layout; 5] = [
        Layout::FullWidth,
        Layout::DividedLr,
        Layout::BoxedFull,
        Layout::BoxedLr,
        Layout::BoxedUd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::FullWidth => "full-width",
            Layout::DividedLr => "divided-lr",
            Layout::BoxedFull => "boxed-full",
            Layout::BoxedLr => "boxed-lr",
            Layout::BoxedUd => "boxed-ud",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| ModelError::UnknownLayout(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub color: String,
    /// 0.0 ..= 1.0
    pub opacity: f64,
    /// Image URL (or data URL); empty when unset
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_repeat: Option<String>,
}

impl Default for Background {
    fn default() -> Self {
        Self::color("#ffffff", 1.0)
    }
}

impl Background {
    pub fn color(color: impl Into<String>, opacity: f64) -> Self {
        Self {
            kind: BackgroundKind::Color,
            color: color.into(),
            opacity,
            image: String::new(),
            image_position: None,
            image_size: None,
            image_repeat: None,
        }
    }

    pub fn image(url: impl Into<String>, fallback_color: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Image,
            image: url.into(),
            ..Self::color(fallback_color, 1.0)
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Shallow slide update; every `Some` field replaces the slide's field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SlideKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentItem>>,
}

impl SlidePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn background(background: Background) -> Self {
        Self {
            background: Some(background),
            ..Default::default()
        }
    }

    pub fn layout(layout: Layout, variant: impl Into<String>) -> Self {
        Self {
            layout: Some(layout),
            variant: Some(variant.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `slide`; the slide id is never touched
    pub fn apply_to(&self, slide: &mut Slide) {
        if let Some(name) = &self.name {
            slide.name = name.clone();
        }
        if let Some(description) = &self.description {
            slide.description = description.clone();
        }
        if let Some(kind) = self.kind {
            slide.kind = kind;
        }
        if let Some(visible) = self.visible {
            slide.visible = visible;
        }
        if let Some(layout) = self.layout {
            slide.layout = layout;
        }
        if let Some(variant) = &self.variant {
            slide.variant = variant.clone();
        }
        if let Some(background) = &self.background {
            slide.background = background.clone();
        }
        if let Some(content) = &self.content {
            slide.content = content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_touches_named_fields() {
        let mut slide = Slide::new("q1", "Question_1", SlideKind::Question)
            .with_description("Question Page");
        let before = slide.clone();

        SlidePatch::name("Renamed").apply_to(&mut slide);

        assert_eq!(slide.name, "Renamed");
        assert_eq!(slide.description, before.description);
        assert_eq!(slide.background, before.background);
        assert_eq!(slide.id, "q1");
    }

    #[test]
    fn test_layout_parsing() {
        assert_eq!("boxed-lr".parse::<Layout>().unwrap(), Layout::BoxedLr);
        assert!("diagonal".parse::<Layout>().is_err());
        assert_eq!(Layout::DividedLr.to_string(), "divided-lr");
    }

    #[test]
    fn test_slide_wire_format() {
        let json = r##"{
            "id": "welcome",
            "name": "Welcome",
            "type": "welcome",
            "layout": "full-width",
            "variant": "fw-2",
            "background": { "type": "image", "color": "#fff", "opacity": 0.5, "image": "a.jpg" }
        }"##;

        let slide: Slide = serde_json::from_str(json).unwrap();
        assert_eq!(slide.kind, SlideKind::Welcome);
        assert!(slide.visible);
        assert_eq!(slide.variant, "fw-2");
        assert_eq!(slide.background.kind, BackgroundKind::Image);
        assert!(slide.background.has_image());
        assert!(slide.content.is_empty());
    }

    #[test]
    fn test_empty_patch() {
        assert!(SlidePatch::default().is_empty());
        assert!(!SlidePatch::layout(Layout::FullWidth, "fw-2").is_empty());
    }
}
