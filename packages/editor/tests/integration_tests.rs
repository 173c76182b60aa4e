//! Integration tests for the editor crate

use formdeck_editor::model::{
    ButtonDesignPatch, Form, QuestionDesignPatch, Slide, SlideKind, SlidePatch,
};
use formdeck_editor::panels::{slide_list, Panel, QuestionEditor};
use formdeck_editor::{
    audit_form, ChangeKind, Document, EditorError, Mutation, MutationError, Pipeline,
    SelectionAction, StoreEvent,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

fn doc_with_two_questions() -> Document {
    let mut doc = Document::default();
    let mutation = slide_list::new_question_slide(doc.form());
    doc.apply(mutation).unwrap();
    doc
}

fn invalid_mutations() -> Vec<Mutation> {
    vec![
        Mutation::UpdateSlide {
            id: "missing".to_string(),
            patch: SlidePatch::name("X"),
        },
        Mutation::DeleteSlide {
            id: "missing".to_string(),
        },
        Mutation::ToggleSlideVisibility {
            id: "missing".to_string(),
        },
        Mutation::UpdateTextContent {
            slide_id: "missing".to_string(),
            content_id: "text_1".to_string(),
            text: "Hello".to_string(),
        },
        Mutation::UpdateTextContent {
            slide_id: "welcome".to_string(),
            content_id: "missing".to_string(),
            text: "Hello".to_string(),
        },
    ]
}

#[test]
fn test_update_slide_name_only() {
    let mut doc = Document::default();
    let before = doc.form().find_slide("question_1").unwrap().clone();

    doc.apply(Mutation::UpdateSlide {
        id: "question_1".to_string(),
        patch: SlidePatch::name("X"),
    })
    .unwrap();

    let after = doc.form().find_slide("question_1").unwrap();
    assert_eq!(after.name, "X");
    assert_eq!(Slide { name: before.name.clone(), ..after.clone() }, before);
}

#[test]
fn test_invalid_targets_leave_form_untouched() {
    let mut doc = Document::default();
    let snapshot = doc.form().clone();

    for mutation in invalid_mutations() {
        let err = doc.apply(mutation).unwrap_err();
        assert!(matches!(err, EditorError::Mutation(MutationError::NotFound(_))));
        assert_eq!(doc.form(), &snapshot);
    }
    assert_eq!(doc.version, 0);
    assert!(!doc.can_undo());
    assert!(!doc.has_unsaved_changes());
}

#[test]
fn test_slide_order_must_be_a_permutation() {
    let mut doc = doc_with_two_questions();
    let snapshot = doc.form().clone();

    let mut dropped = snapshot.slides.clone();
    dropped.pop();
    let mut duplicated = snapshot.slides.clone();
    duplicated[2] = duplicated[1].clone();

    for slides in [dropped, duplicated] {
        let err = doc.apply(Mutation::UpdateSlideOrder { slides }).unwrap_err();
        assert!(matches!(err, EditorError::Mutation(MutationError::NotAPermutation)));
        assert_eq!(doc.form(), &snapshot);
    }

    let mut reordered = snapshot.slides.clone();
    reordered.swap(1, 2);
    doc.apply(Mutation::UpdateSlideOrder { slides: reordered })
        .unwrap();

    let mut ids: Vec<&str> = doc.form().slide_ids();
    let mut expected = snapshot.slide_ids();
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);
    assert_eq!(doc.form().slides[1].id, "question_2");
}

#[test]
fn test_design_updates_are_type_gated() {
    let mut doc = Document::default();
    let item_before = doc.form().slides[0].find_content("text_1").unwrap().clone();

    let err = doc
        .apply(Mutation::UpdateButtonDesign {
            slide_id: "welcome".to_string(),
            content_id: "text_1".to_string(),
            patch: ButtonDesignPatch::ButtonText("Go".to_string()),
        })
        .unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::TypeMismatch { .. })
    ));
    assert_eq!(
        doc.form().slides[0].find_content("text_1").unwrap(),
        &item_before
    );
}

#[test]
fn test_add_slide_after_last_question() {
    let mut doc = Document::default();
    let slide = Slide::new("q2", "Question_2", SlideKind::Question);

    doc.apply(Mutation::AddSlide {
        slide,
        insert_after_id: None,
    })
    .unwrap();

    assert_eq!(
        doc.form().slide_ids(),
        vec!["welcome", "question_1", "q2", "result", "thankyou"]
    );
}

#[test]
fn test_delete_unselected_slide_keeps_selection() {
    let mut doc = doc_with_two_questions();
    assert_eq!(doc.selection().slide_id(), Some("welcome"));

    let result = doc
        .apply(Mutation::DeleteSlide {
            id: "question_1".to_string(),
        })
        .unwrap();

    assert_eq!(
        doc.form().slide_ids(),
        vec!["welcome", "question_2", "result", "thankyou"]
    );
    assert!(!result.selection_changed);
    assert_eq!(doc.selection().slide_id(), Some("welcome"));
}

#[test]
fn test_question_required_leaves_siblings() {
    let mut doc = Document::default();
    let before = doc.form().slides[1].content[0]
        .question_design()
        .unwrap()
        .clone();

    doc.apply(Mutation::UpdateQuestionDesign {
        slide_id: "question_1".to_string(),
        content_id: "question_1".to_string(),
        patch: QuestionDesignPatch::QuestionRequired(false),
    })
    .unwrap();
    doc.apply(Mutation::UpdateQuestionDesign {
        slide_id: "question_1".to_string(),
        content_id: "question_1".to_string(),
        patch: QuestionDesignPatch::QuestionRequired(true),
    })
    .unwrap();

    let after = doc.form().slides[1].content[0].question_design().unwrap();
    assert_eq!(after.question_required, Some(true));
    assert_eq!(after, &before);
}

#[test]
fn test_deleting_selected_slide_reselects() {
    let mut doc = doc_with_two_questions();
    doc.select(SelectionAction::SelectSlide(Some("question_1".to_string())))
        .unwrap();

    let result = doc
        .apply(Mutation::DeleteSlide {
            id: "question_1".to_string(),
        })
        .unwrap();
    assert!(result.selection_changed);
    assert_eq!(doc.selection().slide_id(), Some("question_2"));

    // Undo brings the slide back; the selection stays where it was repaired to
    assert!(doc.undo());
    assert_eq!(doc.selection().slide_id(), Some("question_2"));
    assert!(doc.form().find_slide("question_1").is_some());
}

#[test]
fn test_hiding_selected_slide_reselects() {
    let mut doc = Document::default();
    doc.select(SelectionAction::SelectSlide(Some("question_1".to_string())))
        .unwrap();

    doc.apply(Mutation::ToggleSlideVisibility {
        id: "question_1".to_string(),
    })
    .unwrap();

    // result is hidden, so the next visible slide is thankyou
    assert_eq!(doc.selection().slide_id(), Some("thankyou"));
}

#[test]
fn test_undo_redo_restore_exact_forms() {
    let mut doc = Document::default();
    let initial = doc.form().clone();

    doc.apply(Mutation::SetFormName {
        name: "Signup".to_string(),
    })
    .unwrap();
    let named = doc.form().clone();
    let add = slide_list::new_question_slide(doc.form());
    doc.apply(add).unwrap();
    let extended = doc.form().clone();

    assert!(doc.undo());
    assert_eq!(doc.form(), &named);
    assert!(doc.undo());
    assert_eq!(doc.form(), &initial);
    assert!(!doc.undo());

    assert!(doc.redo());
    assert!(doc.redo());
    assert_eq!(doc.form(), &extended);
    assert!(!doc.redo());
}

#[test]
fn test_batch_rolls_back_on_failure() {
    let mut doc = Document::default();
    let snapshot = doc.form().clone();

    let err = doc
        .apply_batch(
            "Rename and break",
            vec![
                Mutation::SetFormName {
                    name: "Half done".to_string(),
                },
                Mutation::DeleteSlide {
                    id: "missing".to_string(),
                },
            ],
        )
        .unwrap_err();

    assert!(matches!(err, EditorError::Mutation(_)));
    assert_eq!(doc.form(), &snapshot);
    assert_eq!(doc.version, 0);
    assert!(!doc.can_undo());
}

#[test]
fn test_panel_apply_is_one_undo_step() {
    let mut doc = Document::default();
    let initial = doc.form().clone();

    let mut panel = Panel::open(QuestionEditor::new("question_1", "question_1"), &doc).unwrap();
    {
        let design = panel.stage_mut().unwrap();
        design.question_text = Some("Your email?".to_string());
        design.question_required = Some(false);
    }
    assert_eq!(panel.apply(&mut doc).unwrap(), 2);
    assert_eq!(doc.history().undo_levels(), 1);

    assert!(doc.undo());
    assert_eq!(doc.form(), &initial);
}

#[test]
fn test_observers_see_every_change() {
    let mut doc = Document::default();
    let events: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
    let sink = Rc::clone(&events);
    doc.subscribe(move |event: &StoreEvent| sink.borrow_mut().push(event.clone()));

    doc.select(SelectionAction::SelectSlide(Some("question_1".to_string())))
        .unwrap();
    doc.apply(Mutation::SetShowBranding { show: false }).unwrap();
    let _ = doc.apply(Mutation::DeleteSlide {
        id: "missing".to_string(),
    });
    doc.reset();

    let kinds: Vec<ChangeKind> = events.borrow().iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ChangeKind::Selection,
            ChangeKind::Mutation("set_show_branding"),
            ChangeKind::Reset,
        ]
    );
    assert_eq!(events.borrow().last().unwrap().version, 2);
}

#[test]
fn test_file_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("form.json");

    let mut doc = Document::from_form(path.clone(), Form::default());
    doc.save_as(path.clone())?;

    let mut doc = Document::load(path.clone())?;
    assert!(doc.is_file_backed());
    doc.apply(Mutation::SetFormName {
        name: "Saved".to_string(),
    })?;
    assert!(doc.has_unsaved_changes());
    doc.save()?;
    assert!(!doc.has_unsaved_changes());

    let reloaded = Document::load(path)?;
    assert_eq!(reloaded.form(), doc.form());
    assert_eq!(reloaded.form().name, "Saved");
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let err = Document::load(PathBuf::from("/nonexistent/form.json")).unwrap_err();
    assert!(matches!(err, EditorError::Io(_)));
}

#[test]
fn test_pipeline_tracks_mutations() {
    let mut pipeline = Pipeline::new(Document::default());
    let first = pipeline.render();

    let result = pipeline
        .apply_mutation(Mutation::UpdateTextContent {
            slide_id: "welcome".to_string(),
            content_id: "text_1".to_string(),
            text: "Hello there".to_string(),
        })
        .unwrap();

    assert_eq!(result.version, 1);
    assert_ne!(result.canvas, first);
    assert_eq!(pipeline.render(), result.canvas);
}

#[test]
fn test_edited_form_passes_audit() {
    let mut doc = doc_with_two_questions();
    let duplicate = slide_list::duplicate_slide(doc.form(), "question_2").unwrap();
    doc.apply(duplicate).unwrap();

    assert!(audit_form(doc.form()).is_empty());
}
