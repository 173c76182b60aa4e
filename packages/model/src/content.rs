use crate::design::{ButtonDesign, MediaDesign, QuestionDesign, TextDesign};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A block placed on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(flatten)]
    pub body: ContentBody,
}

/// Kind tag plus the design that belongs to that kind
///
/// Serialized as `{"type": "text", "text_design": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBody {
    Text {
        #[serde(default)]
        text_design: TextDesign,
    },
    Media {
        #[serde(default)]
        media_design: MediaDesign,
    },
    Question {
        #[serde(default)]
        question_design: QuestionDesign,
    },
    Button {
        #[serde(default)]
        button_design: ButtonDesign,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Media,
    Question,
    Button,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Media => "media",
            ContentKind::Question => "question",
            ContentKind::Button => "button",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContentItem {
    pub fn text(id: impl Into<String>, text_design: TextDesign) -> Self {
        Self {
            id: id.into(),
            body: ContentBody::Text { text_design },
        }
    }

    pub fn media(id: impl Into<String>, media_design: MediaDesign) -> Self {
        Self {
            id: id.into(),
            body: ContentBody::Media { media_design },
        }
    }

    pub fn question(id: impl Into<String>, question_design: QuestionDesign) -> Self {
        Self {
            id: id.into(),
            body: ContentBody::Question { question_design },
        }
    }

    pub fn button(id: impl Into<String>, button_design: ButtonDesign) -> Self {
        Self {
            id: id.into(),
            body: ContentBody::Button { button_design },
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self.body {
            ContentBody::Text { .. } => ContentKind::Text,
            ContentBody::Media { .. } => ContentKind::Media,
            ContentBody::Question { .. } => ContentKind::Question,
            ContentBody::Button { .. } => ContentKind::Button,
        }
    }

    pub fn text_design(&self) -> Option<&TextDesign> {
        match &self.body {
            ContentBody::Text { text_design } => Some(text_design),
            _ => None,
        }
    }

    pub fn text_design_mut(&mut self) -> Option<&mut TextDesign> {
        match &mut self.body {
            ContentBody::Text { text_design } => Some(text_design),
            _ => None,
        }
    }

    pub fn media_design(&self) -> Option<&MediaDesign> {
        match &self.body {
            ContentBody::Media { media_design } => Some(media_design),
            _ => None,
        }
    }

    pub fn media_design_mut(&mut self) -> Option<&mut MediaDesign> {
        match &mut self.body {
            ContentBody::Media { media_design } => Some(media_design),
            _ => None,
        }
    }

    pub fn question_design(&self) -> Option<&QuestionDesign> {
        match &self.body {
            ContentBody::Question { question_design } => Some(question_design),
            _ => None,
        }
    }

    pub fn question_design_mut(&mut self) -> Option<&mut QuestionDesign> {
        match &mut self.body {
            ContentBody::Question { question_design } => Some(question_design),
            _ => None,
        }
    }

    pub fn button_design(&self) -> Option<&ButtonDesign> {
        match &self.body {
            ContentBody::Button { button_design } => Some(button_design),
            _ => None,
        }
    }

    pub fn button_design_mut(&mut self) -> Option<&mut ButtonDesign> {
        match &mut self.body {
            ContentBody::Button { button_design } => Some(button_design),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::TextKind;

    #[test]
    fn test_wire_format_keeps_only_matching_design() {
        let item = ContentItem::text(
            "text_1",
            TextDesign {
                text: Some("Hello".to_string()),
                kind: Some(TextKind::Header),
                ..Default::default()
            },
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "text_1");
        assert_eq!(value["type"], "text");
        assert_eq!(value["text_design"]["text"], "Hello");
        assert_eq!(value["text_design"]["type"], "header");
        assert!(value.get("button_design").is_none());
        assert!(value.get("media_design").is_none());
    }

    #[test]
    fn test_missing_design_defaults() {
        let item: ContentItem =
            serde_json::from_str(r#"{ "id": "question_1", "type": "question" }"#).unwrap();

        assert_eq!(item.kind(), ContentKind::Question);
        assert_eq!(item.question_design(), Some(&QuestionDesign::default()));
        assert!(item.text_design().is_none());
    }

    #[test]
    fn test_typed_accessors_are_gated() {
        let mut item = ContentItem::button("button_1", ButtonDesign::default());
        assert!(item.button_design_mut().is_some());
        assert!(item.text_design_mut().is_none());
        assert!(item.question_design_mut().is_none());
        assert!(item.media_design_mut().is_none());
    }
}
