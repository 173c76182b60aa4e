//! Starter form shown when a new form is opened

use crate::content::ContentItem;
use crate::design::{ButtonDesign, MediaDesign, MediaType, QuestionDesign, QuestionType, TextDesign, TextKind};
use crate::form::{Form, FormSettings};
use crate::slide::{Background, Layout, Slide, SlideKind};

pub const DEFAULT_FORM_NAME: &str = "Untitled Form";
pub const DEFAULT_BACKGROUND_IMAGE: &str =
    "https://images.unsplash.com/photo-1603484477859-abe6a73f9366?q=80&w=3087&auto=format&fit=crop";
pub const PLACEHOLDER_MEDIA: &str = "https://placehold.co/600x400";

impl Default for Form {
    fn default() -> Self {
        Form {
            name: DEFAULT_FORM_NAME.to_string(),
            settings: FormSettings::default(),
            slides: vec![
                welcome_slide(),
                question_slide(),
                result_slide(),
                thankyou_slide(),
            ],
        }
    }
}

fn heading(text: &str, kind: TextKind, size: &str, color: &str) -> TextDesign {
    TextDesign {
        text: Some(text.to_string()),
        kind: Some(kind),
        font_size: Some(size.to_string()),
        font_color: Some(color.to_string()),
        font_alignment: Some("center".to_string()),
        font_weight: Some("bold".to_string()),
        font_style: Some("normal".to_string()),
        font_decoration: Some("none".to_string()),
        font_spacing: Some("0".to_string()),
        font_line_height: Some("1.5".to_string()),
        font_letter_spacing: Some("0".to_string()),
        font_tracking: Some("0".to_string()),
        font_transform: Some("none".to_string()),
        ..Default::default()
    }
}

fn placeholder_media() -> MediaDesign {
    MediaDesign {
        media: Some(PLACEHOLDER_MEDIA.to_string()),
        media_type: Some(MediaType::Image),
        ..Default::default()
    }
}

fn welcome_slide() -> Slide {
    Slide::new("welcome", "Welcome", SlideKind::Welcome)
        .with_description("Welcome Page")
        .with_background(Background::image(DEFAULT_BACKGROUND_IMAGE, "#ffffff"))
        .with_content(ContentItem::media("media_1", placeholder_media()))
        .with_content(ContentItem::text(
            "text_1",
            heading("Welcome to the form builder", TextKind::Header, "45px", "#000000"),
        ))
        .with_content(ContentItem::text(
            "text_2",
            heading("Create interactive forms in minutes", TextKind::Subheader, "30px", "#3e3e3e"),
        ))
        .with_content(ContentItem::button(
            "button_1",
            ButtonDesign {
                button_text: Some("Get Started".to_string()),
                button_color: Some("#ffffff".to_string()),
                button_background_color: Some("#7257fe".to_string()),
                button_border_color: Some("#7257fe".to_string()),
                button_border_radius: Some("6px".to_string()),
                button_font_size: Some("14px".to_string()),
                button_font_weight: Some("500".to_string()),
                button_width: Some("auto".to_string()),
                ..Default::default()
            },
        ))
}

/// Text question shown on the starter form
pub fn default_question() -> QuestionDesign {
    QuestionDesign {
        question_type: Some(QuestionType::Text),
        question_text: Some("What is your name?".to_string()),
        question_required: Some(true),
        question_description: Some("Please enter your name".to_string()),
        question_placeholder: Some("Enter your name".to_string()),
        question_error_message: Some("Please enter your name".to_string()),
        question_font_size: Some("24px".to_string()),
        question_description_font_size: Some("18px".to_string()),
        question_error_message_font_size: Some("12px".to_string()),
        question_error_message_alignment: Some(crate::design::Alignment::Left),
        ..Default::default()
    }
}

fn question_slide() -> Slide {
    Slide::new("question_1", "Question_1", SlideKind::Question)
        .with_description("Question Page")
        .with_background(Background::image(DEFAULT_BACKGROUND_IMAGE, "#E2E2BF"))
        .with_content(ContentItem::question("question_1", default_question()))
}

fn result_slide() -> Slide {
    Slide::new("result", "Result", SlideKind::Result)
        .with_description("Result Page")
        .with_background(Background::image(DEFAULT_BACKGROUND_IMAGE, "#E2E2BF"))
        .with_content(ContentItem::text(
            "text_2",
            TextDesign {
                text: Some("Thank you for your response".to_string()),
                ..Default::default()
            },
        ))
        .hidden()
}

fn thankyou_slide() -> Slide {
    Slide::new("thankyou", "Thankyou", SlideKind::Thankyou)
        .with_description("Thankyou Page")
        .with_layout(Layout::FullWidth, "fw-2")
        .with_background(Background::image(DEFAULT_BACKGROUND_IMAGE, "#E2E2BF"))
        .with_content(ContentItem::media("media_1", placeholder_media()))
        .with_content(ContentItem::text(
            "text_1",
            heading("Thank you for your response", TextKind::Header, "45px", "#000000"),
        ))
}
