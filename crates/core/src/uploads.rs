//! Upload categories, extension rules and stored-file naming.

use crate::error::CoreError;

/// Image extensions accepted for gallery photos and catalogue pictures.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Document extensions accepted for resumes.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Longest original filename kept for display.
pub const MAX_ORIGINAL_NAME_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    Image,
    Document,
}

impl UploadCategory {
    /// Sub-directory of the upload root that holds this category.
    pub fn directory(&self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Document => "documents",
        }
    }

    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Document => DOCUMENT_EXTENSIONS,
        }
    }
}

/// Extract and validate the lowercase extension of an uploaded filename.
pub fn validate_extension(filename: &str, category: UploadCategory) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if category.allowed_extensions().contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported file type '.{ext}'. Supported: {}",
            category
                .allowed_extensions()
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

/// Generate a collision-free stored filename for an upload.
pub fn stored_file_name(ext: &str) -> String {
    format!("{}.{ext}", uuid::Uuid::new_v4())
}

/// Relative path (from the upload root) where a stored file lives.
///
/// Always uses `/` so the same string works as a URL path under `/uploads`.
pub fn relative_upload_path(category: UploadCategory, stored_name: &str) -> String {
    format!("{}/{stored_name}", category.directory())
}

/// Reduce a client-supplied filename to a safe display name.
///
/// Drops any directory components, control characters and path separators
/// and caps the length.
pub fn sanitize_original_name(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_ORIGINAL_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Whether a stored relative path stays inside the upload root.
pub fn is_safe_relative_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path.split('/').all(|part| !part.is_empty() && part != "..")
}
