//! Background image intake
//!
//! Builds the opaque background reference (a `data:` URI) from an uploaded
//! image. Only the file picker side cares about the content; the session and
//! the persistence layer treat the result as an opaque string.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use shared::error::ErrorCode;

use crate::error::{EditorError, EditorResult};

/// Upper bound for an embedded background (10MB)
pub const MAX_BACKGROUND_SIZE: usize = 10 * 1024 * 1024;

/// Encode raw image bytes with a known content type.
pub fn data_uri_from_bytes(data: &[u8], mime: &str) -> EditorResult<String> {
    validate_image(data, mime)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(data)))
}

/// Read an image file and encode it, guessing the content type from the
/// extension.
pub fn data_uri_from_path(path: impl AsRef<Path>) -> EditorResult<String> {
    let path = path.as_ref();
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let data = std::fs::read(path).map_err(|e| {
        EditorError::rejected(
            ErrorCode::InvalidRequest,
            format!("Failed to read {}: {}", path.display(), e),
        )
    })?;
    tracing::debug!(path = %path.display(), mime = %mime, bytes = data.len(), "Background image read");
    data_uri_from_bytes(&data, mime.essence_str())
}

fn validate_image(data: &[u8], mime: &str) -> EditorResult<()> {
    if data.is_empty() {
        return Err(EditorError::rejected(
            ErrorCode::RequiredField,
            "Empty file provided",
        ));
    }
    if data.len() > MAX_BACKGROUND_SIZE {
        return Err(EditorError::rejected(
            ErrorCode::ValueOutOfRange,
            format!(
                "File too large. Maximum size is {}MB",
                MAX_BACKGROUND_SIZE / 1024 / 1024
            ),
        ));
    }
    if !mime.to_ascii_lowercase().starts_with("image/") {
        return Err(EditorError::rejected(
            ErrorCode::UnsupportedImageFormat,
            format!("Unsupported content type '{}'", mime),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_bytes_to_data_uri() {
        let uri = data_uri_from_bytes(b"abc", "image/png").unwrap();
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_non_image_rejected() {
        let err = data_uri_from_bytes(b"abc", "text/plain").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedImageFormat);
    }

    #[test]
    fn test_empty_rejected() {
        let err = data_uri_from_bytes(&[], "image/png").unwrap_err();
        assert_eq!(err.code(), ErrorCode::RequiredField);
    }

    #[test]
    fn test_path_guesses_mime() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(PNG_MAGIC).unwrap();
        let uri = data_uri_from_path(file.path()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_path_with_unknown_extension_rejected() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"hello").unwrap();
        let err = data_uri_from_path(file.path()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedImageFormat);
    }

    #[test]
    fn test_missing_file() {
        let err = data_uri_from_path("/nonexistent/floor.png").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
