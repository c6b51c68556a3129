//! Repository for the `gallery_photos` table.

use hkv_core::pagination::clamp_page;
use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{
    CreateGalleryPhoto, GalleryListParams, GalleryPhoto, UpdateGalleryPhoto,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, file_path, original_filename, \
     file_size_bytes, width, height, views, is_active, display_order, created_at, updated_at";

/// Filter shared by `list` and `count`.
const LIST_FILTER: &str = "WHERE ($1::TEXT IS NULL OR category = $1) \
       AND ($2::BOOL IS FALSE OR is_active = TRUE)";

/// Provides CRUD operations for gallery photos.
pub struct GalleryPhotoRepo;

impl GalleryPhotoRepo {
    /// Record an uploaded photo.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryPhoto,
    ) -> Result<GalleryPhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_photos
                (title, description, category, file_path, original_filename, file_size_bytes,
                 width, height, is_active, display_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, TRUE), COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryPhoto>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.file_path)
            .bind(&input.original_filename)
            .bind(input.file_size_bytes)
            .bind(input.width)
            .bind(input.height)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a photo by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryPhoto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_photos WHERE id = $1");
        sqlx::query_as::<_, GalleryPhoto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List photos in display order.
    pub async fn list(
        pool: &PgPool,
        params: &GalleryListParams,
    ) -> Result<Vec<GalleryPhoto>, sqlx::Error> {
        let (limit, offset) = clamp_page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_photos {LIST_FILTER}
             ORDER BY display_order ASC, created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, GalleryPhoto>(&query)
            .bind(&params.category)
            .bind(params.active_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count photos matching the same filters as [`GalleryPhotoRepo::list`].
    pub async fn count(pool: &PgPool, params: &GalleryListParams) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM gallery_photos {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(&params.category)
            .bind(params.active_only)
            .fetch_one(pool)
            .await
    }

    /// Update photo metadata. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryPhoto,
    ) -> Result<Option<GalleryPhoto>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_photos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                is_active = COALESCE($5, is_active),
                display_order = COALESCE($6, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryPhoto>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Increment the view counter, returning the updated row.
    pub async fn increment_views(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryPhoto>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_photos SET views = views + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryPhoto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a photo row, returning it so the caller can remove the file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<GalleryPhoto>, sqlx::Error> {
        let query = format!("DELETE FROM gallery_photos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, GalleryPhoto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
