use formdeck_model::{
    ButtonDesign, ContentBody, ContentItem, Form, FormSettings, MediaDesign, QuestionDesign, Slide,
    TextDesign,
};

/// Visitor pattern for traversing a form immutably
///
/// This trait provides default implementations that walk the entire tree.
/// Override specific visit_* methods to perform custom actions on nodes.
pub trait Visitor: Sized {
    fn visit_form(&mut self, form: &Form) {
        walk_form(self, form);
    }

    fn visit_settings(&mut self, _settings: &FormSettings) {
        // Leaf node, no children to walk
    }

    fn visit_slide(&mut self, slide: &Slide) {
        walk_slide(self, slide);
    }

    fn visit_content(&mut self, slide: &Slide, item: &ContentItem) {
        walk_content(self, slide, item);
    }

    fn visit_text(&mut self, _slide: &Slide, _id: &str, _design: &TextDesign) {}

    fn visit_media(&mut self, _slide: &Slide, _id: &str, _design: &MediaDesign) {}

    fn visit_question(&mut self, _slide: &Slide, _id: &str, _design: &QuestionDesign) {}

    fn visit_button(&mut self, _slide: &Slide, _id: &str, _design: &ButtonDesign) {}
}

// Default walk implementations for immutable visitor

pub fn walk_form<V: Visitor>(visitor: &mut V, form: &Form) {
    visitor.visit_settings(&form.settings);
    for slide in &form.slides {
        visitor.visit_slide(slide);
    }
}

pub fn walk_slide<V: Visitor>(visitor: &mut V, slide: &Slide) {
    for item in &slide.content {
        visitor.visit_content(slide, item);
    }
}

pub fn walk_content<V: Visitor>(visitor: &mut V, slide: &Slide, item: &ContentItem) {
    match &item.body {
        ContentBody::Text { text_design } => visitor.visit_text(slide, &item.id, text_design),
        ContentBody::Media { media_design } => visitor.visit_media(slide, &item.id, media_design),
        ContentBody::Question { question_design } => {
            visitor.visit_question(slide, &item.id, question_design)
        }
        ContentBody::Button { button_design } => {
            visitor.visit_button(slide, &item.id, button_design)
        }
    }
}
