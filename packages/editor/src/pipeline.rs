//! # Editing Pipeline
//!
//! Coordinates the document lifecycle: Mutate → Project → Cache
//!
//! The Pipeline manages:
//! - Applying mutations and selection changes
//! - Re-projecting the form to a canvas
//! - Skipping projection when neither the form nor the selection moved

use crate::selection::{Selection, SelectionAction};
use crate::{Document, EditorError, Mutation};
use formdeck_render::{Projector, VirtualCanvas};

/// Manages the full edit → render pipeline
#[derive(Debug)]
pub struct Pipeline {
    document: Document,
    projector: Projector,
    last_canvas: Option<VirtualCanvas>,
    /// Version and selection the cached canvas was rendered from
    rendered: Option<(u64, Selection)>,
}

impl Pipeline {
    /// Create pipeline for document
    pub fn new(document: Document) -> Self {
        Self::with_projector(document, Projector::new())
    }

    pub fn with_projector(document: Document, projector: Projector) -> Self {
        Self {
            document,
            projector,
            last_canvas: None,
            rendered: None,
        }
    }

    /// Apply mutation and return the refreshed canvas
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Result<PipelineResult, EditorError> {
        let result = self.document.apply(mutation)?;
        let canvas = self.render();

        Ok(PipelineResult {
            version: result.version,
            canvas,
            selection_changed: result.selection_changed,
        })
    }

    /// Move the focus and return the refreshed canvas
    pub fn select(&mut self, action: SelectionAction) -> Result<VirtualCanvas, EditorError> {
        self.document.select(action)?;
        Ok(self.render())
    }

    /// Canvas for the current state, reusing the cache when nothing moved
    pub fn render(&mut self) -> VirtualCanvas {
        let key = (self.document.version, self.document.selection().clone());
        if let (Some(canvas), Some(rendered)) = (&self.last_canvas, &self.rendered) {
            if *rendered == key {
                return canvas.clone();
            }
        }
        self.project(key)
    }

    /// Full re-projection (for recovery/debugging)
    pub fn full_render(&mut self) -> VirtualCanvas {
        let key = (self.document.version, self.document.selection().clone());
        self.project(key)
    }

    fn project(&mut self, key: (u64, Selection)) -> VirtualCanvas {
        let canvas = self
            .projector
            .render(self.document.form(), self.document.selection());
        self.last_canvas = Some(canvas.clone());
        self.rendered = Some(key);
        canvas
    }

    /// Get current document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get mutable document reference
    ///
    /// Changes made through it are picked up by the next `render`.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Get last canvas (if any)
    pub fn last_canvas(&self) -> Option<&VirtualCanvas> {
        self.last_canvas.as_ref()
    }

    /// Clear canvas cache (force a projection on next render)
    pub fn clear_cache(&mut self) {
        self.last_canvas = None;
        self.rendered = None;
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// New version number
    pub version: u64,

    /// Canvas for the new state
    pub canvas: VirtualCanvas,

    pub selection_changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_model::SlidePatch;

    #[test]
    fn test_pipeline_initial_render() {
        let mut pipeline = Pipeline::new(Document::default());
        let canvas = pipeline.full_render();

        assert_eq!(canvas.slide_id.as_deref(), Some("welcome"));
        assert!(pipeline.last_canvas().is_some());
    }

    #[test]
    fn test_pipeline_mutation_refreshes_canvas() {
        let mut pipeline = Pipeline::new(Document::default());
        pipeline.render();

        let result = pipeline
            .apply_mutation(Mutation::UpdateSlide {
                id: "welcome".to_string(),
                patch: SlidePatch {
                    variant: Some("fw-2".to_string()),
                    ..Default::default()
                },
            })
            .unwrap();

        assert_eq!(result.version, 1);
        let slide = result.canvas.find_by_key("welcome").unwrap();
        assert_eq!(slide.attr("data-variant"), Some("fw-2"));
    }

    #[test]
    fn test_failed_mutation_keeps_cache() {
        let mut pipeline = Pipeline::new(Document::default());
        let first = pipeline.render();

        let err = pipeline.apply_mutation(Mutation::DeleteSlide {
            id: "missing".to_string(),
        });
        assert!(err.is_err());
        assert_eq!(pipeline.document().version, 0);
        assert_eq!(pipeline.last_canvas(), Some(&first));
    }

    #[test]
    fn test_selection_rerenders() {
        let mut pipeline = Pipeline::new(Document::default());
        pipeline.render();

        let canvas = pipeline
            .select(SelectionAction::SelectSlide(Some("question_1".to_string())))
            .unwrap();
        assert_eq!(canvas.slide_id.as_deref(), Some("question_1"));
    }
}
