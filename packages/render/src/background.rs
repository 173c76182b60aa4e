use crate::color::{format_number, Rgba};
use crate::vdom::StyleMap;
use formdeck_model::{Background, BackgroundKind};

const FALLBACK_COLOR: &str = "#ffffff";

/// Quoted CSS `url()`; quotes, backslashes and line breaks are escaped
pub fn css_url(url: &str) -> String {
    let mut quoted = String::with_capacity(url.len() + 7);
    quoted.push_str("url(\"");
    for ch in url.chars() {
        match ch {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            '\n' => quoted.push_str("\\a "),
            '\r' => quoted.push_str("\\d "),
            _ => quoted.push(ch),
        }
    }
    quoted.push_str("\")");
    quoted
}

/// Effective CSS for a slide background
///
/// An image URL wins over the color. A parseable color is folded with the
/// opacity into one `rgba(..)` value; any other color string is passed
/// through next to an `opacity` property.
pub fn resolve_background(background: &Background) -> StyleMap {
    let mut styles = StyleMap::new();

    if background.has_image() {
        styles.insert(
            "background-image".into(),
            css_url(&background.image),
        );
        styles.insert(
            "background-size".into(),
            background
                .image_size
                .clone()
                .unwrap_or_else(|| "cover".to_string()),
        );
        styles.insert(
            "background-position".into(),
            background
                .image_position
                .clone()
                .unwrap_or_else(|| "center".to_string()),
        );
        styles.insert(
            "background-repeat".into(),
            background
                .image_repeat
                .clone()
                .unwrap_or_else(|| "no-repeat".to_string()),
        );
        if !background.color.is_empty() {
            styles.insert("background-color".into(), background.color.clone());
        }
        styles.insert("opacity".into(), format_number(background.opacity));
        return styles;
    }

    if background.kind == BackgroundKind::Color && !background.color.is_empty() {
        match Rgba::parse(&background.color) {
            Some(color) => {
                styles.insert(
                    "background-color".into(),
                    color.with_opacity(background.opacity).to_css(),
                );
            }
            None => {
                styles.insert("background-color".into(), background.color.clone());
                styles.insert("opacity".into(), format_number(background.opacity));
            }
        }
        return styles;
    }

    let color = if background.color.is_empty() {
        FALLBACK_COLOR.to_string()
    } else {
        background.color.clone()
    };
    let opacity = if background.opacity > 0.0 {
        background.opacity
    } else {
        1.0
    };
    styles.insert("background-color".into(), color);
    styles.insert("opacity".into(), format_number(opacity));
    styles
}
