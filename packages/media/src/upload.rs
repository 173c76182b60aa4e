//! Local files to data URLs for media, background and logo pickers

use crate::error::{MediaError, MediaResult};
use base64::engine::general_purpose;
use base64::Engine as _;
use std::path::Path;
use tracing::info;

/// Largest accepted brand logo
pub const MAX_LOGO_BYTES: u64 = 1024 * 1024;

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// MIME type guessed from the file extension
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read any file as a data URL
pub async fn read_as_data_url(path: impl AsRef<Path>) -> MediaResult<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let mime = guess_mime(path);
    info!(path = %path.display(), mime = %mime, bytes = bytes.len(), "Read upload");
    Ok(data_url(&mime, &bytes))
}

/// Read an image for a media block or slide background
pub async fn read_image(path: impl AsRef<Path>) -> MediaResult<String> {
    let path = path.as_ref();
    let mime = guess_mime(path);
    if !mime.starts_with("image/") {
        return Err(MediaError::NotAnImage { mime });
    }
    read_as_data_url(path).await
}

/// Read a brand logo: PNG only, at most [`MAX_LOGO_BYTES`]
pub async fn read_brand_logo(path: impl AsRef<Path>) -> MediaResult<String> {
    let path = path.as_ref();
    let mime = guess_mime(path);
    if mime != "image/png" {
        return Err(MediaError::NotPng { mime });
    }

    let size = tokio::fs::metadata(path).await?.len();
    if size > MAX_LOGO_BYTES {
        return Err(MediaError::TooLarge {
            size,
            max: MAX_LOGO_BYTES,
        });
    }
    read_as_data_url(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("text/plain", b"hi"), "data:text/plain;base64,aGk=");
    }

    #[tokio::test]
    async fn test_read_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        tokio::fs::write(&path, [0xFF, 0xD8, 0xFF]).await.unwrap();

        let url = read_image(&path).await.unwrap();
        assert_eq!(url, "data:image/jpeg;base64,/9j/");

        let text = dir.path().join("notes.txt");
        tokio::fs::write(&text, "x").await.unwrap();
        assert!(matches!(read_image(&text).await, Err(MediaError::NotAnImage { .. })));
    }

    #[tokio::test]
    async fn test_brand_logo_rules() {
        let dir = tempfile::tempdir().unwrap();

        let jpg = dir.path().join("logo.jpg");
        tokio::fs::write(&jpg, [0u8; 4]).await.unwrap();
        let err = read_brand_logo(&jpg).await.unwrap_err();
        assert_eq!(err.to_string(), "Please select a PNG image file.");

        let big = dir.path().join("big.png");
        tokio::fs::write(&big, vec![0u8; (MAX_LOGO_BYTES + 1) as usize])
            .await
            .unwrap();
        assert!(matches!(
            read_brand_logo(&big).await,
            Err(MediaError::TooLarge { size, .. }) if size == MAX_LOGO_BYTES + 1
        ));

        let small = dir.path().join("logo.png");
        tokio::fs::write(&small, [0x89, b'P', b'N', b'G']).await.unwrap();
        assert!(read_brand_logo(&small)
            .await
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        assert!(matches!(
            read_as_data_url("/nonexistent/logo.png").await,
            Err(MediaError::Io(_))
        ));
    }
}
