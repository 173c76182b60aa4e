//! Add-slide panel operations: new, duplicate, delete and drag-reorder of
//! question slides. Each returns the mutation to apply; welcome, result and
//! thank-you slides stay fixed.

use crate::{EditorError, Mutation, MutationError};
use formdeck_model::{
    duplicate_description, duplicate_name, next_question_id, Background, ContentItem, Form,
    QuestionDesign, QuestionType, Slide, SlideKind,
};

/// Question on a freshly added slide
fn new_question() -> QuestionDesign {
    QuestionDesign {
        question_type: Some(QuestionType::SingleSelect),
        question_text: Some("What is your name?".to_string()),
        question_options: Some(vec![
            "Option 1".to_string(),
            "Option 2".to_string(),
            "Option 3".to_string(),
        ]),
        question_required: Some(true),
        question_description: Some("Please select an option".to_string()),
        question_placeholder: Some("Select an option".to_string()),
        question_error_message: Some("Please select an option".to_string()),
        ..Default::default()
    }
}

/// Blank single-choice question slide placed after the last question
pub fn new_question_slide(form: &Form) -> Mutation {
    let id = next_question_id(&form.slides);
    let name = format!("Question_{}", form.question_count() + 1);

    let slide = Slide::new(id, name, SlideKind::Question)
        .with_description("Question Page")
        .with_background(Background::color("#ffffff", 1.0))
        .with_content(ContentItem::question("question_1", new_question()));

    Mutation::AddSlide {
        slide,
        insert_after_id: None,
    }
}

fn question_slide<'a>(form: &'a Form, id: &str) -> Result<&'a Slide, EditorError> {
    let slide = form
        .find_slide(id)
        .ok_or_else(|| EditorError::from(MutationError::slide(id)))?;
    if slide.kind != SlideKind::Question {
        return Err(EditorError::NotQuestionSlide(id.to_string()));
    }
    Ok(slide)
}

/// Visible copy of a question slide, inserted right after it
pub fn duplicate_slide(form: &Form, id: &str) -> Result<Mutation, EditorError> {
    let source = question_slide(form, id)?;

    let mut copy = source.clone();
    copy.id = next_question_id(&form.slides);
    copy.name = duplicate_name(&source.name);
    copy.description = duplicate_description(&source.description);
    copy.visible = true;

    Ok(Mutation::AddSlide {
        slide: copy,
        insert_after_id: Some(id.to_string()),
    })
}

pub fn delete_question_slide(form: &Form, id: &str) -> Result<Mutation, EditorError> {
    question_slide(form, id)?;
    Ok(Mutation::DeleteSlide { id: id.to_string() })
}

/// Drop `dragged` onto `target`: the dragged slide takes the target's index
///
/// `None` unless both are distinct question slides.
pub fn move_question_slide(form: &Form, dragged: &str, target: &str) -> Option<Mutation> {
    if dragged == target {
        return None;
    }
    let from = form.slide_index(dragged)?;
    let to = form.slide_index(target)?;
    let is_question = |index: usize| form.slides[index].kind == SlideKind::Question;
    if !is_question(from) || !is_question(to) {
        return None;
    }

    let mut slides = form.slides.clone();
    let moved = slides.remove(from);
    slides.insert(to, moved);
    Some(Mutation::UpdateSlideOrder { slides })
}
