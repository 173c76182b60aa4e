//! Per-item style resolution
//!
//! Every item's style map is built from three layers, later layers winning:
//!
//! 1. the form's global font family
//! 2. defaults for the item's kind
//! 3. fields set in the item's own design

use crate::color::format_number;
use crate::vdom::StyleMap;
use formdeck_model::{ButtonDesign, MediaDesign, QuestionDesign, TextDesign};

struct Layers {
    styles: StyleMap,
}

impl Layers {
    fn new(global_font: &str) -> Self {
        let mut styles = StyleMap::new();
        if !global_font.is_empty() {
            styles.insert("font-family".into(), global_font.to_string());
        }
        Self { styles }
    }

    fn without_font() -> Self {
        Self {
            styles: StyleMap::new(),
        }
    }

    fn defaults(mut self, defaults: &[(&str, &str)]) -> Self {
        for (key, value) in defaults {
            self.styles.insert((*key).to_string(), (*value).to_string());
        }
        self
    }

    fn set(&mut self, key: &str, value: Option<&String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.styles.insert(key.to_string(), value.clone());
        }
    }

    fn set_px(&mut self, key: &str, value: Option<&String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.styles.insert(key.to_string(), with_px(value));
        }
    }

    fn finish(self) -> StyleMap {
        self.styles
    }
}

/// `"2"` → `"2px"`; values that already carry a unit are kept
fn with_px(value: &str) -> String {
    if value.parse::<f64>().is_ok() {
        format!("{}px", value)
    } else {
        value.to_string()
    }
}

const TEXT_DEFAULTS: &[(&str, &str)] = &[
    ("font-size", "16px"),
    ("line-height", "1.5"),
    ("text-align", "center"),
];

const BUTTON_DEFAULTS: &[(&str, &str)] = &[
    ("padding", "8px 16px"),
    ("border-radius", "6px"),
    ("cursor", "pointer"),
];

const MEDIA_DEFAULTS: &[(&str, &str)] = &[
    ("width", "320px"),
    ("object-fit", "cover"),
    ("object-position", "center"),
    ("border-radius", "8px"),
];

const QUESTION_DEFAULTS: &[(&str, &str)] = &[
    ("font-size", "24px"),
    ("font-weight", "600"),
    ("text-align", "center"),
];

const INPUT_DEFAULTS: &[(&str, &str)] = &[
    ("width", "100%"),
    ("border-radius", "8px"),
    ("border-color", "#e2e8f0"),
    ("border-width", "1px"),
    ("border-style", "solid"),
    ("background-color", "#ffffff"),
    ("color", "#1a202c"),
    ("font-weight", "400"),
];

pub fn text_style(design: &TextDesign, global_font: &str) -> StyleMap {
    let mut layers = Layers::new(global_font).defaults(TEXT_DEFAULTS);
    layers.set("font-family", design.font_family.as_ref());
    layers.set("font-size", design.font_size.as_ref());
    layers.set("color", design.font_color.as_ref());
    layers.set("text-align", design.font_alignment.as_ref());
    layers.set("font-weight", design.font_weight.as_ref());
    layers.set("font-style", design.font_style.as_ref());
    layers.set("text-decoration", design.font_decoration.as_ref());
    layers.set_px("word-spacing", design.font_spacing.as_ref());
    layers.set("line-height", design.font_line_height.as_ref());
    layers.set_px("letter-spacing", design.font_letter_spacing.as_ref());
    layers.set("text-transform", design.font_transform.as_ref());
    layers.finish()
}

pub fn button_style(design: &ButtonDesign, global_font: &str) -> StyleMap {
    let mut layers = Layers::new(global_font).defaults(BUTTON_DEFAULTS);
    layers.set("color", design.button_color.as_ref());
    layers.set("background-color", design.button_background_color.as_ref());
    layers.set("border-color", design.button_border_color.as_ref());
    layers.set("border-radius", design.button_border_radius.as_ref());
    layers.set("font-size", design.button_font_size.as_ref());
    layers.set("font-weight", design.button_font_weight.as_ref());
    layers.set("width", design.button_width.as_ref());
    layers.set("box-shadow", design.button_shadow.as_ref());
    if let Some(border) = design.button_border_color.as_ref().filter(|c| !c.is_empty()) {
        layers
            .styles
            .insert("border".into(), format!("1px solid {}", border));
    }
    layers.finish()
}

pub fn media_style(design: &MediaDesign) -> StyleMap {
    let mut layers = Layers::without_font().defaults(MEDIA_DEFAULTS);
    layers.set("width", design.media_width.as_ref());
    layers.set("height", design.media_height.as_ref());
    layers.set("object-position", design.media_position.as_ref());
    if let Some(opacity) = design.media_overlay_opacity {
        layers
            .styles
            .insert("opacity".into(), format_number(opacity));
    }
    layers.finish()
}

/// Style of the question heading
pub fn question_style(design: &QuestionDesign, global_font: &str) -> StyleMap {
    let mut layers = Layers::new(global_font).defaults(QUESTION_DEFAULTS);
    layers.set("font-family", design.question_font_family.as_ref());
    layers.set("font-size", design.question_font_size.as_ref());
    layers.set("color", design.question_font_color.as_ref());
    layers.set("font-weight", design.question_font_weight.as_ref());
    if let Some(alignment) = design.question_alignment {
        layers
            .styles
            .insert("text-align".into(), alignment.as_str().to_string());
    }
    layers.set("margin", design.question_margin.as_ref());
    layers.set("padding", design.question_padding.as_ref());
    layers.finish()
}

pub fn description_style(design: &QuestionDesign, global_font: &str) -> StyleMap {
    let mut layers = Layers::new(global_font).defaults(&[("font-size", "18px"), ("text-align", "center")]);
    layers.set("font-size", design.question_description_font_size.as_ref());
    if let Some(alignment) = design.question_description_alignment {
        layers
            .styles
            .insert("text-align".into(), alignment.as_str().to_string());
    }
    layers.finish()
}

pub fn input_style(design: &QuestionDesign, global_font: &str) -> StyleMap {
    let mut layers = Layers::new(global_font).defaults(INPUT_DEFAULTS);
    layers.set("width", design.input_width.as_ref());
    layers.set("height", design.input_height.as_ref());
    layers.set("border-radius", design.input_border_radius.as_ref());
    layers.set("border-color", design.input_border_color.as_ref());
    layers.set("border-width", design.input_border_width.as_ref());
    layers.set("background-color", design.input_background_color.as_ref());
    layers.set("color", design.input_text_color.as_ref());
    layers.set("font-size", design.input_font_size.as_ref());
    layers.set("font-weight", design.input_font_weight.as_ref());
    layers.set("font-family", design.input_font_family.as_ref());
    layers.set("padding", design.input_padding.as_ref());
    layers.set("margin", design.input_margin.as_ref());
    layers.finish()
}

pub fn error_message_style(design: &QuestionDesign) -> StyleMap {
    let mut layers = Layers::without_font().defaults(&[("font-size", "12px"), ("text-align", "left")]);
    layers.set("color", design.input_error_color.as_ref());
    layers.set("font-size", design.question_error_message_font_size.as_ref());
    if let Some(alignment) = design.question_error_message_alignment {
        layers
            .styles
            .insert("text-align".into(), alignment.as_str().to_string());
    }
    layers.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_model::Alignment;

    #[test]
    fn test_layer_precedence() {
        let plain = text_style(&TextDesign::default(), "Nunito");
        assert_eq!(plain["font-family"], "Nunito");
        assert_eq!(plain["font-size"], "16px");

        let design = TextDesign {
            font_family: Some("Lato".into()),
            font_size: Some("45px".into()),
            ..Default::default()
        };
        let styled = text_style(&design, "Nunito");
        assert_eq!(styled["font-family"], "Lato");
        assert_eq!(styled["font-size"], "45px");
    }

    #[test]
    fn test_spacing_gets_px_suffix() {
        let design = TextDesign {
            font_spacing: Some("4".into()),
            font_letter_spacing: Some("0.5em".into()),
            ..Default::default()
        };
        let styles = text_style(&design, "");
        assert_eq!(styles["word-spacing"], "4px");
        assert_eq!(styles["letter-spacing"], "0.5em");
        assert!(!styles.contains_key("font-family"));
    }

    #[test]
    fn test_button_border_shorthand() {
        let design = ButtonDesign {
            button_border_color: Some("#7257fe".into()),
            button_background_color: Some("#7257fe".into()),
            ..Default::default()
        };
        let styles = button_style(&design, "Nunito");
        assert_eq!(styles["border"], "1px solid #7257fe");
        assert_eq!(styles["background-color"], "#7257fe");
        assert_eq!(styles["padding"], "8px 16px");

        assert!(!button_style(&ButtonDesign::default(), "").contains_key("border"));
    }

    #[test]
    fn test_empty_design_values_do_not_override_defaults() {
        let design = QuestionDesign {
            input_border_radius: Some(String::new()),
            question_alignment: Some(Alignment::Left),
            ..Default::default()
        };
        assert_eq!(input_style(&design, "")["border-radius"], "8px");
        assert_eq!(question_style(&design, "")["text-align"], "left");
    }
}
