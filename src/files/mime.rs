//! MIME type inference from file extensions.

use std::path::Path;

/// Content type used when the extension is unknown or missing.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Returns the MIME type for `path` based on its extension.
///
/// Extension matching is case-insensitive.
pub fn mime_type_for(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return DEFAULT_MIME_TYPE.to_string();
    };

    mime_guess::from_ext(&ext.to_ascii_lowercase())
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(mime_type_for("serverroot/index.html"), "text/html");
        assert_eq!(mime_type_for("style.css"), "text/css");
        assert_eq!(mime_type_for("notes.txt"), "text/plain");
        assert_eq!(mime_type_for("photo.jpg"), "image/jpeg");
        assert_eq!(mime_type_for("data.json"), "application/json");
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(mime_type_for("INDEX.HTML"), "text/html");
        assert_eq!(mime_type_for("Logo.PNG"), "image/png");
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(mime_type_for("README"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for("blob.zzzunknown"), DEFAULT_MIME_TYPE);
    }
}
