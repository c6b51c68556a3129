//! Repository for the `gallery_videos` table.

use hkv_core::pagination::clamp_page;
use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{
    CreateGalleryVideo, GalleryListParams, GalleryVideo, UpdateGalleryVideo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, video_url, thumbnail_url, category, views, \
     is_active, display_order, created_at, updated_at";

/// Filter shared by `list` and `count`.
const LIST_FILTER: &str = "WHERE ($1::TEXT IS NULL OR category = $1) \
       AND ($2::BOOL IS FALSE OR is_active = TRUE)";

/// Provides CRUD operations for gallery videos.
pub struct GalleryVideoRepo;

impl GalleryVideoRepo {
    /// Insert a new video with an already-resolved thumbnail.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryVideo,
        thumbnail_url: Option<&str>,
    ) -> Result<GalleryVideo, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_videos
                (title, description, video_url, thumbnail_url, category, is_active, display_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryVideo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.video_url.trim())
            .bind(thumbnail_url)
            .bind(&input.category)
            .bind(input.is_active)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryVideo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_videos WHERE id = $1");
        sqlx::query_as::<_, GalleryVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List videos in display order.
    pub async fn list(
        pool: &PgPool,
        params: &GalleryListParams,
    ) -> Result<Vec<GalleryVideo>, sqlx::Error> {
        let (limit, offset) = clamp_page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_videos {LIST_FILTER}
             ORDER BY display_order ASC, created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, GalleryVideo>(&query)
            .bind(&params.category)
            .bind(params.active_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count videos matching the same filters as [`GalleryVideoRepo::list`].
    pub async fn count(pool: &PgPool, params: &GalleryListParams) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM gallery_videos {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(&params.category)
            .bind(params.active_only)
            .fetch_one(pool)
            .await
    }

    /// Update a video. `thumbnail_url` is the resolved thumbnail when the
    /// caller changed the URL or thumbnail.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryVideo,
        thumbnail_url: Option<&str>,
    ) -> Result<Option<GalleryVideo>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_videos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                video_url = COALESCE($4, video_url),
                thumbnail_url = COALESCE($5, thumbnail_url),
                category = COALESCE($6, category),
                is_active = COALESCE($7, is_active),
                display_order = COALESCE($8, display_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryVideo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.video_url.as_deref().map(str::trim))
            .bind(thumbnail_url)
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
    ) -> Result<Option<GalleryVideo>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_videos SET views = views + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`, returning the updated row.
    pub async fn toggle_active(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryVideo>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_videos SET is_active = NOT is_active WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryVideo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
