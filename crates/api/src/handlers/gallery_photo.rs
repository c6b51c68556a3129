//! Handlers for `/gallery/photos`.
//!
//! Photos are uploaded as multipart forms; the image is written under
//! `UPLOAD_DIR/images/` and served back from `/uploads/images/...`.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hkv_core::error::CoreError;
use hkv_core::types::DbId;
use hkv_core::uploads::UploadCategory;
use hkv_db::models::gallery::{
    CreateGalleryPhoto, GalleryListParams, GalleryPhoto, UpdateGalleryPhoto,
};
use hkv_db::repositories::GalleryPhotoRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::storage::{remove_upload, save_upload};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GalleryPhoto",
        id,
    })
}

fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid value for '{name}': {value}")))
}

/// POST /api/v1/gallery/photos
///
/// Multipart form with a required `file` field and a required `title`.
/// Optional text fields: `description`, `category`, `display_order`,
/// `is_active`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<GalleryPhoto>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut input = CreateGalleryPhoto {
        title: String::new(),
        description: None,
        category: None,
        file_path: String::new(),
        original_filename: None,
        file_size_bytes: 0,
        width: None,
        height: None,
        is_active: None,
        display_order: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match name.as_str() {
            "title" => input.title = text.trim().to_string(),
            "description" => input.description = Some(text),
            "category" => input.category = Some(text.trim().to_string()),
            "display_order" => input.display_order = Some(parse_field(&name, &text)?),
            "is_active" => input.is_active = Some(parse_field(&name, &text)?),
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    validate_input(&input)?;

    let stored = save_upload(&state.config.upload_dir, UploadCategory::Image, &filename, &data)
        .await?;
    input.file_path = stored.relative_path.clone();
    input.original_filename = Some(stored.original_name);
    input.file_size_bytes = stored.size_bytes;
    if let Some((width, height)) = stored.dimensions {
        input.width = i32::try_from(width).ok();
        input.height = i32::try_from(height).ok();
    }

    let photo = match GalleryPhotoRepo::create(&state.pool, &input).await {
        Ok(photo) => photo,
        Err(e) => {
            remove_upload(&state.config.upload_dir, &stored.relative_path).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        photo_id = photo.id,
        path = %photo.file_path,
        size = photo.file_size_bytes,
        "Gallery photo uploaded",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// GET /api/v1/gallery/photos
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<Json<PageResponse<GalleryPhoto>>> {
    let photos = GalleryPhotoRepo::list(&state.pool, &params).await?;
    let total = GalleryPhotoRepo::count(&state.pool, &params).await?;
    Ok(Json(PageResponse::new(
        photos,
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/gallery/photos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryPhoto>>> {
    let photo = GalleryPhotoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: photo }))
}

/// PUT /api/v1/gallery/photos/{id}
///
/// Metadata only; replacing the image means uploading a new photo.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryPhoto>,
) -> AppResult<Json<DataResponse<GalleryPhoto>>> {
    validate_input(&input)?;
    let photo = GalleryPhotoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(photo_id = id, "Gallery photo updated");
    Ok(Json(DataResponse { data: photo }))
}

/// POST /api/v1/gallery/photos/{id}/view
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GalleryPhoto>>> {
    let photo = GalleryPhotoRepo::increment_views(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /api/v1/gallery/photos/{id}
///
/// Removes the row, then the stored image.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let photo = GalleryPhotoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    remove_upload(&state.config.upload_dir, &photo.file_path).await;
    tracing::info!(photo_id = id, path = %photo.file_path, "Gallery photo deleted");
    Ok(StatusCode::NO_CONTENT)
}
