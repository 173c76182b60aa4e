use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid form JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),
}
