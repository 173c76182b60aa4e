use formdeck_common::Visitor;
use formdeck_model::{Form, FormSettings, QuestionDesign, Slide, TextDesign};
use std::collections::BTreeSet;
use tracing::debug;

/// Families served from Google Fonts; anything else is assumed to be a system font
pub const GOOGLE_FONTS: &[&str] = &[
    "Inter",
    "Roboto",
    "Open Sans",
    "Lato",
    "Poppins",
    "Montserrat",
    "Source Sans Pro",
    "Nunito",
    "Ubuntu",
    "Raleway",
    "PT Sans",
    "Noto Sans",
    "Work Sans",
    "Merriweather",
    "Playfair Display",
];

pub fn is_google_font(family: &str) -> bool {
    GOOGLE_FONTS.contains(&family)
}

/// Stylesheet URL for an allow-listed family
pub fn stylesheet_url(family: &str) -> Option<String> {
    if !is_google_font(family) {
        return None;
    }
    Some(format!(
        "https://fonts.googleapis.com/css2?family={}:wght@300;400;500;600;700&display=swap",
        family.replace(' ', "+")
    ))
}

/// Tracks which font stylesheets have already been injected
#[derive(Debug, Default)]
pub struct FontLoader {
    loaded: BTreeSet<String>,
}

impl FontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL to inject the first time an allow-listed family is requested
    pub fn request(&mut self, family: &str) -> Option<String> {
        let url = stylesheet_url(family)?;
        if !self.loaded.insert(family.to_string()) {
            return None;
        }
        debug!(family, "Loading font stylesheet");
        Some(url)
    }

    pub fn is_loaded(&self, family: &str) -> bool {
        self.loaded.contains(family)
    }
}

/// Every font family a form references, global font first
#[derive(Debug, Default)]
pub struct FontCollector {
    pub families: Vec<String>,
}

impl FontCollector {
    pub fn collect(form: &Form) -> Vec<String> {
        let mut collector = Self::default();
        collector.visit_form(form);
        collector.families
    }

    fn push(&mut self, family: Option<&String>) {
        if let Some(family) = family.filter(|f| !f.is_empty()) {
            if !self.families.contains(family) {
                self.families.push(family.clone());
            }
        }
    }
}

impl Visitor for FontCollector {
    fn visit_settings(&mut self, settings: &FormSettings) {
        self.push(Some(&settings.general.font_family));
    }

    fn visit_text(&mut self, _slide: &Slide, _id: &str, design: &TextDesign) {
        self.push(design.font_family.as_ref());
    }

    fn visit_question(&mut self, _slide: &Slide, _id: &str, design: &QuestionDesign) {
        self.push(design.question_font_family.as_ref());
        self.push(design.input_font_family.as_ref());
    }
}
