//! Form audit: structural checks a form can fail without any mutation
//! having been rejected (hand-edited files, imported documents).

use crate::validation::custom_regex;
use formdeck_common::{walk_content, walk_form, walk_slide, Visitor};
use formdeck_model::{ContentItem, Form, NavMenu, QuestionType, Slide};
use formdeck_render::layout::{lookup, variants_for};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// Where in the form a diagnostic points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Location {
    pub fn form() -> Self {
        Self::default()
    }

    pub fn slide(slide_id: impl Into<String>) -> Self {
        Self {
            slide_id: Some(slide_id.into()),
            content_id: None,
        }
    }

    pub fn content(slide_id: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            slide_id: Some(slide_id.into()),
            content_id: Some(content_id.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.slide_id, &self.content_id) {
            (Some(slide), Some(content)) => write!(f, "{}/{}", slide, content),
            (Some(slide), None) => write!(f, "{}", slide),
            _ => write!(f, "form"),
        }
    }
}

/// A finding from one audit rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,

    /// The rule that produced this diagnostic
    pub rule: String,

    pub message: String,

    pub location: Location,

    /// Optional hint for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            rule: rule.into(),
            message: message.into(),
            location,
            suggestion: None,
        }
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            rule: rule.into(),
            message: message.into(),
            location,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

/// One structural check over a form
pub trait AuditRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check_form(&self, _form: &Form) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn check_slide(&self, _slide: &Slide) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn check_content(&self, _slide: &Slide, _item: &ContentItem) -> Vec<Diagnostic> {
        Vec::new()
    }
}

struct UniqueSlideIds;

impl AuditRule for UniqueSlideIds {
    fn name(&self) -> &'static str {
        "unique-slide-ids"
    }

    fn description(&self) -> &'static str {
        "Slide ids must be unique within the form"
    }

    fn check_form(&self, form: &Form) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        form.slides
            .iter()
            .filter(|slide| !seen.insert(slide.id.as_str()))
            .map(|slide| {
                Diagnostic::error(
                    self.name(),
                    format!("Slide id '{}' is used more than once", slide.id),
                    Location::slide(&slide.id),
                )
            })
            .collect()
    }
}

struct UniqueContentIds;

impl AuditRule for UniqueContentIds {
    fn name(&self) -> &'static str {
        "unique-content-ids"
    }

    fn description(&self) -> &'static str {
        "Content ids must be unique within their slide"
    }

    fn check_slide(&self, slide: &Slide) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        slide
            .content
            .iter()
            .filter(|item| !seen.insert(item.id.as_str()))
            .map(|item| {
                Diagnostic::error(
                    self.name(),
                    format!("Content id '{}' is used more than once", item.id),
                    Location::content(&slide.id, &item.id),
                )
            })
            .collect()
    }
}

struct VisibleSlide;

impl AuditRule for VisibleSlide {
    fn name(&self) -> &'static str {
        "visible-slide"
    }

    fn description(&self) -> &'static str {
        "At least one slide must be visible"
    }

    fn check_form(&self, form: &Form) -> Vec<Diagnostic> {
        if form.slides.iter().any(|slide| slide.visible) {
            return Vec::new();
        }
        vec![Diagnostic::error(self.name(), "No slide is visible", Location::form())
            .with_suggestion("Show at least one slide")]
    }
}

struct NavMenuCap;

impl AuditRule for NavMenuCap {
    fn name(&self) -> &'static str {
        "nav-menu-cap"
    }

    fn description(&self) -> &'static str {
        "Header menus hold at most 5 items, footer menus at most 3"
    }

    fn check_form(&self, form: &Form) -> Vec<Diagnostic> {
        [NavMenu::Header, NavMenu::Footer]
            .into_iter()
            .filter_map(|menu| {
                let count = form.settings.general.menu_items(menu).len();
                (count > menu.max_items()).then(|| {
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "The {} menu has {} items, at most {} are allowed",
                            menu,
                            count,
                            menu.max_items()
                        ),
                        Location::form(),
                    )
                })
            })
            .collect()
    }
}

struct KnownLayoutVariant;

impl AuditRule for KnownLayoutVariant {
    fn name(&self) -> &'static str {
        "known-layout-variant"
    }

    fn description(&self) -> &'static str {
        "A slide's variant must belong to its layout"
    }

    fn check_slide(&self, slide: &Slide) -> Vec<Diagnostic> {
        let Err(err) = lookup(slide.layout, &slide.variant) else {
            return Vec::new();
        };
        let mut diagnostic = Diagnostic::warning(self.name(), err.to_string(), Location::slide(&slide.id));
        if let Some(first) = variants_for(slide.layout).next() {
            diagnostic = diagnostic.with_suggestion(format!("Use '{}'", first.id));
        }
        vec![diagnostic]
    }
}

struct QuestionText;

impl AuditRule for QuestionText {
    fn name(&self) -> &'static str {
        "question-text"
    }

    fn description(&self) -> &'static str {
        "Questions should have visible text"
    }

    fn check_content(&self, slide: &Slide, item: &ContentItem) -> Vec<Diagnostic> {
        let Some(question) = item.question_design() else {
            return Vec::new();
        };
        let blank = question
            .question_text
            .as_deref()
            .map_or(true, |text| text.trim().is_empty());
        if !blank {
            return Vec::new();
        }
        vec![Diagnostic::warning(
            self.name(),
            "Question has no text",
            Location::content(&slide.id, &item.id),
        )]
    }
}

struct SelectOptions;

impl AuditRule for SelectOptions {
    fn name(&self) -> &'static str {
        "select-options"
    }

    fn description(&self) -> &'static str {
        "Single and multi select questions need options"
    }

    fn check_content(&self, slide: &Slide, item: &ContentItem) -> Vec<Diagnostic> {
        let Some(question) = item.question_design() else {
            return Vec::new();
        };
        let is_select = matches!(
            question.question_type,
            Some(QuestionType::SingleSelect | QuestionType::MultiSelect)
        );
        let has_options = question
            .question_options
            .as_ref()
            .is_some_and(|options| !options.is_empty());
        if !is_select || has_options {
            return Vec::new();
        }
        vec![Diagnostic::error(
            self.name(),
            "Select question has no options",
            Location::content(&slide.id, &item.id),
        )]
    }
}

struct CustomPattern;

impl AuditRule for CustomPattern {
    fn name(&self) -> &'static str {
        "custom-pattern"
    }

    fn description(&self) -> &'static str {
        "Custom validation patterns must be valid regular expressions"
    }

    fn check_content(&self, slide: &Slide, item: &ContentItem) -> Vec<Diagnostic> {
        let Some(custom) = item
            .question_design()
            .and_then(|question| question.custom_validation.as_ref())
        else {
            return Vec::new();
        };
        match custom_regex(&custom.pattern) {
            Ok(_) => Vec::new(),
            Err(err) => vec![Diagnostic::error(
                self.name(),
                format!("Invalid validation pattern '{}': {}", custom.pattern, err),
                Location::content(&slide.id, &item.id),
            )],
        }
    }
}

struct MediaSource;

impl AuditRule for MediaSource {
    fn name(&self) -> &'static str {
        "media-source"
    }

    fn description(&self) -> &'static str {
        "Media blocks should point at an image or video"
    }

    fn check_content(&self, slide: &Slide, item: &ContentItem) -> Vec<Diagnostic> {
        let Some(media) = item.media_design() else {
            return Vec::new();
        };
        if media.media.as_deref().is_some_and(|src| !src.is_empty()) {
            return Vec::new();
        }
        vec![Diagnostic::warning(
            self.name(),
            "Media block has no source",
            Location::content(&slide.id, &item.id),
        )
        .with_suggestion("Pick an image from the media panel")]
    }
}

/// Registry of audit rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn AuditRule>>,
}

impl RuleRegistry {
    /// Registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(UniqueSlideIds),
                Box::new(UniqueContentIds),
                Box::new(VisibleSlide),
                Box::new(NavMenuCap),
                Box::new(KnownLayoutVariant),
                Box::new(QuestionText),
                Box::new(SelectOptions),
                Box::new(CustomPattern),
                Box::new(MediaSource),
            ],
        }
    }

    pub fn rules(&self) -> &[Box<dyn AuditRule>] {
        &self.rules
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn AuditRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

struct Auditor<'r> {
    registry: &'r RuleRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl Visitor for Auditor<'_> {
    fn visit_form(&mut self, form: &Form) {
        for rule in self.registry.rules() {
            self.diagnostics.extend(rule.check_form(form));
        }
        walk_form(self, form);
    }

    fn visit_slide(&mut self, slide: &Slide) {
        for rule in self.registry.rules() {
            self.diagnostics.extend(rule.check_slide(slide));
        }
        walk_slide(self, slide);
    }

    fn visit_content(&mut self, slide: &Slide, item: &ContentItem) {
        for rule in self.registry.rules() {
            self.diagnostics.extend(rule.check_content(slide, item));
        }
        walk_content(self, slide, item);
    }
}

/// Audit a form with the built-in rules
pub fn audit_form(form: &Form) -> Vec<Diagnostic> {
    audit_with(form, &RuleRegistry::new())
}

pub fn audit_with(form: &Form, registry: &RuleRegistry) -> Vec<Diagnostic> {
    let mut auditor = Auditor {
        registry,
        diagnostics: Vec::new(),
    };
    auditor.visit_form(form);
    auditor.diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_model::{CustomValidation, MediaDesign, NavItem};

    fn rules_hit(form: &Form) -> Vec<String> {
        audit_form(form).into_iter().map(|d| d.rule).collect()
    }

    #[test]
    fn test_default_form_is_clean() {
        assert!(audit_form(&Form::default()).is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut form = Form::default();
        let copy = form.slides[1].clone();
        form.slides.push(copy);
        form.slides[0].content.push(ContentItem::text("text_1", Default::default()));

        let hits = rules_hit(&form);
        assert!(hits.contains(&"unique-slide-ids".to_string()));
        assert!(hits.contains(&"unique-content-ids".to_string()));
    }

    #[test]
    fn test_no_visible_slide() {
        let mut form = Form::default();
        for slide in &mut form.slides {
            slide.visible = false;
        }
        let diagnostics = audit_form(&form);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(diagnostics[0].location.to_string(), "form");
    }

    #[test]
    fn test_nav_menu_over_cap() {
        let mut form = Form::default();
        form.settings.general.footer_nav_menu_items =
            (0..4).map(|i| NavItem::new(format!("f{}", i), "Link", "/")).collect();

        let diagnostics = audit_form(&form);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "The footer menu has 4 items, at most 3 are allowed"
        );
    }

    #[test]
    fn test_unknown_variant_suggests_first() {
        let mut form = Form::default();
        form.slides[1].variant = "dlr-1".to_string();

        let diagnostics = audit_form(&form);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
        assert_eq!(diagnostics[0].suggestion.as_deref(), Some("Use 'fw-1'"));
        assert_eq!(diagnostics[0].location.to_string(), "question_1");
    }

    #[test]
    fn test_question_checks() {
        let mut form = Form::default();
        let question = form.slides[1].content[0].question_design_mut().unwrap();
        question.question_text = Some("  ".to_string());
        question.question_type = Some(QuestionType::MultiSelect);
        question.question_options = Some(Vec::new());
        question.custom_validation = Some(CustomValidation {
            pattern: "/[a-/".to_string(),
            message: "Nope".to_string(),
            expected_value: None,
        });

        let mut hits = rules_hit(&form);
        hits.sort();
        assert_eq!(hits, vec!["custom-pattern", "question-text", "select-options"]);
    }

    #[test]
    fn test_media_without_source() {
        let mut form = Form::default();
        form.slides[0]
            .content
            .push(ContentItem::media("media_9", MediaDesign::default()));

        let diagnostics = audit_form(&form);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.to_string(), "welcome/media_9");
    }

    #[test]
    fn test_empty_registry() {
        let mut form = Form::default();
        form.slides.clear();
        assert!(audit_with(&form, &RuleRegistry::empty()).is_empty());
        assert_eq!(format!("{:?}", RuleRegistry::new()), "RuleRegistry { rules: \"9 rules\" }");
    }
}
