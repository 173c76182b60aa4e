use formdeck_model::Layout;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Unknown variant '{variant}' for layout '{layout}'")]
    UnknownVariant { layout: Layout, variant: String },
}

pub type RenderResult<T> = Result<T, RenderError>;
