//! Handlers for `/gallery/videos`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hkv_core::error::CoreError;
use hkv_core::gallery::{resolve_thumbnail, validate_video_url};
use hkv_core::types::DbId;
use hkv_db::models::gallery::{
    CreateGalleryVideo, GalleryListParams, GalleryVideo, UpdateGalleryVideo,
};
use hkv_db::repositories::GalleryVideoRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GalleryVideo",
        id,
    })
}

/// POST /api/v1/gallery/videos
///
/// YouTube links get a thumbnail derived from the video id unless one is
/// supplied.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGalleryVideo>,
) -> AppResult<(StatusCode, Json<DataResponse<GalleryVideo>>)> {
    validate_input(&input)?;
    validate_video_url(&input.video_url)?;
    let thumbnail = resolve_thumbnail(input.thumbnail_url.as_deref(), &input.video_url);

    let video = GalleryVideoRepo::create(&state.pool, &input, thumbnail.as_deref()).await?;
    tracing::info!(video_id = video.id, "Gallery video created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// GET /api/v1/gallery/videos
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<Json<PageResponse<GalleryVideo>>> {
    let videos = GalleryVideoRepo::list(&state.pool, &params).await?;
    let total = GalleryVideoRepo::count(&state.pool, &params).await?;
    Ok(Json(PageResponse::new(
        videos,
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/gallery/videos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryVideo>>> {
    let video = GalleryVideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: video }))
}

/// PUT /api/v1/gallery/videos/{id}
///
/// A new `video_url` without an explicit thumbnail re-derives the thumbnail.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryVideo>,
) -> AppResult<Json<DataResponse<GalleryVideo>>> {
    validate_input(&input)?;
    let thumbnail = match input.video_url.as_deref() {
        Some(url) => {
            validate_video_url(url)?;
            resolve_thumbnail(input.thumbnail_url.as_deref(), url)
        }
        None => input.thumbnail_url.clone(),
    };

    let video = GalleryVideoRepo::update(&state.pool, id, &input, thumbnail.as_deref())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(video_id = id, "Gallery video updated");
    Ok(Json(DataResponse { data: video }))
}

/// POST /api/v1/gallery/videos/{id}/view
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryVideo>>> {
    let video = GalleryVideoRepo::increment_views(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: video }))
}

/// PATCH /api/v1/gallery/videos/{id}/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryVideo>>> {
    let video = GalleryVideoRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(video_id = id, is_active = video.is_active, "Gallery video toggled");
    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/v1/gallery/videos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if GalleryVideoRepo::delete(&state.pool, id).await? {
        tracing::info!(video_id = id, "Gallery video deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
