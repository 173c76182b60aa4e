//! Error types for the editor

use crate::mutations::MutationError;
use crate::selection::SelectionError;
use formdeck_model::{ModelError, NavMenu};
use formdeck_render::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Form error: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Layout error: {0}")]
    Render(#[from] RenderError),

    #[error("Document is not file-backed")]
    NotFileBacked,

    #[error("Nothing is staged in this panel")]
    NothingStaged,

    #[error("The {menu} menu holds at most {max} items")]
    NavMenuFull { menu: NavMenu, max: usize },

    #[error("Slide {0} is not a question slide")]
    NotQuestionSlide(String),
}
