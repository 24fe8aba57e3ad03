//! Embedding uploaded images into slides as `data:` URIs.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::{DeckError, Result};

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// MIME type for a common image file extension.
pub fn mime_from_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

/// Encodes image bytes as a `data:{mime};base64,...` URI.
///
/// # Errors
///
/// `DeckError::Validation` if `mime_type` is not an `image/*` type or the payload is
/// larger than [`MAX_IMAGE_BYTES`].
pub fn embed_image(bytes: &[u8], mime_type: &str) -> Result<String> {
    if !mime_type.starts_with("image/") {
        return Err(DeckError::validation("Please select an image file"));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DeckError::validation("Image size must be less than 5MB"));
    }
    Ok(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
}

/// Reads an image from disk and embeds it. The MIME type comes from the extension.
pub async fn load_image_file(path: &Path) -> Result<String> {
    let mime_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_from_extension)
        .ok_or_else(|| DeckError::validation("Please select an image file"))?;

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_IMAGE_BYTES as u64 {
        return Err(DeckError::validation("Image size must be less than 5MB"));
    }
    let bytes = tokio::fs::read(path).await?;
    log::debug!("Embedding {} ({} bytes)", path.display(), bytes.len());
    embed_image(&bytes, mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_as_data_uri() {
        let uri = embed_image(b"\x89PNG", "image/png").unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn rejects_non_images_and_large_payloads() {
        assert!(matches!(
            embed_image(b"hello", "text/plain"),
            Err(DeckError::Validation(_))
        ));
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(embed_image(&big, "image/jpeg").is_err());
        assert!(embed_image(&big[..MAX_IMAGE_BYTES], "image/jpeg").is_ok());
    }

    #[test]
    fn maps_extensions() {
        assert_eq!(mime_from_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_from_extension("svg"), Some("image/svg+xml"));
        assert_eq!(mime_from_extension("pdf"), None);
    }

    #[tokio::test]
    async fn loads_image_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.gif");
        tokio::fs::write(&path, b"GIF89a").await.unwrap();
        let uri = load_image_file(&path).await.unwrap();
        assert!(uri.starts_with("data:image/gif;base64,"));

        let notes = dir.path().join("notes.txt");
        tokio::fs::write(&notes, b"x").await.unwrap();
        assert!(load_image_file(&notes).await.is_err());
    }
}
