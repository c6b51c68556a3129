//! Local-disk storage for uploaded photos and resumes.
//!
//! Files live under `UPLOAD_DIR/<category>/{uuid}.{ext}` and are served
//! back by the static `/uploads` route. The database stores the path
//! relative to the upload root.

use std::io::Cursor;
use std::path::Path;

use hkv_core::error::CoreError;
use hkv_core::uploads::{
    is_safe_relative_path, relative_upload_path, sanitize_original_name, stored_file_name,
    validate_extension, UploadCategory,
};

use crate::error::{AppError, AppResult};

/// A file written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Path relative to the upload root, e.g. `images/<uuid>.png`.
    pub relative_path: String,
    /// Sanitised client filename, kept for display.
    pub original_name: String,
    pub size_bytes: i64,
    /// Pixel dimensions, for image uploads.
    pub dimensions: Option<(u32, u32)>,
}

/// Validate and persist an uploaded file.
///
/// Images must decode far enough to report their dimensions; documents are
/// only checked by extension.
pub async fn save_upload(
    upload_root: &Path,
    category: UploadCategory,
    filename: &str,
    data: &[u8],
) -> AppResult<StoredUpload> {
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let ext = validate_extension(filename, category)?;

    let dimensions = match category {
        UploadCategory::Image => Some(image_dimensions(data).ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Uploaded file is not a readable image".into(),
            ))
        })?),
        UploadCategory::Document => None,
    };

    let dir = upload_root.join(category.directory());
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored_name = stored_file_name(&ext);
    tokio::fs::write(dir.join(&stored_name), data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let relative_path = relative_upload_path(category, &stored_name);
    tracing::debug!(path = %relative_path, size = data.len(), "Stored upload");

    Ok(StoredUpload {
        relative_path,
        original_name: sanitize_original_name(filename),
        size_bytes: data.len() as i64,
        dimensions,
    })
}

/// Remove a previously stored upload. Missing files are ignored; other
/// failures are logged and swallowed so the row deletion still succeeds.
pub async fn remove_upload(upload_root: &Path, relative_path: &str) {
    if !is_safe_relative_path(relative_path) {
        tracing::warn!(path = %relative_path, "Refusing to remove upload outside upload root");
        return;
    }

    match tokio::fs::remove_file(upload_root.join(relative_path)).await {
        Ok(()) => tracing::debug!(path = %relative_path, "Removed upload"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %relative_path, error = %e, "Failed to remove upload"),
    }
}

/// Read image dimensions from the header without decoding pixel data.
pub fn image_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn reads_png_dimensions() {
        assert_eq!(image_dimensions(&png_bytes(7, 3)), Some((7, 3)));
        assert_eq!(image_dimensions(b"not an image"), None);
    }

    #[tokio::test]
    async fn saves_image_under_category_directory() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_upload(dir.path(), UploadCategory::Image, "../Temple.PNG", &png_bytes(2, 2))
            .await
            .unwrap();

        assert!(stored.relative_path.starts_with("images/"));
        assert!(stored.relative_path.ends_with(".png"));
        assert_eq!(stored.original_name, "Temple.PNG");
        assert_eq!(stored.dimensions, Some((2, 2)));
        assert!(dir.path().join(&stored.relative_path).exists());

        remove_upload(dir.path(), &stored.relative_path).await;
        assert!(!dir.path().join(&stored.relative_path).exists());
    }

    #[tokio::test]
    async fn rejects_fake_images_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_upload(dir.path(), UploadCategory::Image, "x.jpg", b"text")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));

        let err = save_upload(dir.path(), UploadCategory::Document, "cv.pdf", b"")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn documents_are_not_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let stored = save_upload(dir.path(), UploadCategory::Document, "cv.pdf", b"%PDF-1.4")
            .await
            .unwrap();
        assert!(stored.relative_path.starts_with("documents/"));
        assert_eq!(stored.dimensions, None);
        assert_eq!(stored.size_bytes, 8);
    }
}
