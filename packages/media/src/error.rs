use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Unsplash access key not found")]
    MissingAccessKey,

    #[error("Image search failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid search URL: {0}")]
    Url(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please select an image file")]
    NotAnImage { mime: String },

    #[error("Please select a PNG image file.")]
    NotPng { mime: String },

    #[error("File size must be less than 1MB.")]
    TooLarge { size: u64, max: u64 },
}

pub type MediaResult<T> = Result<T, MediaError>;
