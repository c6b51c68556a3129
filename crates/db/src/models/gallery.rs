//! Photo and video gallery models.

use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `gallery_videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryVideo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub views: i64,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a video. `thumbnail_url` is derived from YouTube links
/// when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryVideo {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 2048))]
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating a video. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryVideo {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 2048))]
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// A row from the `gallery_photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryPhoto {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Path relative to the upload directory, served under `/uploads`.
    pub file_path: String,
    pub original_filename: Option<String>,
    pub file_size_bytes: i64,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub views: i64,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an uploaded photo. Built by the upload handler from
/// the multipart form and the stored file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryPhoto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub file_path: String,
    pub original_filename: Option<String>,
    pub file_size_bytes: i64,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating photo metadata. The file itself is immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGalleryPhoto {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// Filters shared by the photo and video listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryListParams {
    pub category: Option<String>,
    #[serde(default)]
    pub active_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
