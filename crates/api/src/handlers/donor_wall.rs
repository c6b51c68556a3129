//! Handlers for the `/donor-wall` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hkv_core::donor_tier::{DonorTier, TIER_ORDER};
use hkv_core::error::CoreError;
use hkv_core::types::DbId;
use hkv_db::models::donor_wall::{
    CreateDonorWallEntry, DonorTierGroup, DonorWallEntry, DonorWallListParams,
    UpdateDonorWallEntry,
};
use hkv_db::repositories::DonorWallRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "DonorWallEntry",
        id,
    })
}

/// POST /api/v1/donor-wall
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDonorWallEntry>,
) -> AppResult<(StatusCode, Json<DataResponse<DonorWallEntry>>)> {
    validate_input(&input)?;
    let entry = DonorWallRepo::create(&state.pool, &input).await?;
    tracing::info!(entry_id = entry.id, tier = %entry.tier, "Donor wall entry created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/donor-wall
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DonorWallListParams>,
) -> AppResult<Json<PageResponse<DonorWallEntry>>> {
    if let Some(tier) = &params.tier {
        DonorTier::from_str(tier)?;
    }
    let entries = DonorWallRepo::list(&state.pool, &params).await?;
    let total = DonorWallRepo::count(&state.pool, &params).await?;
    Ok(Json(PageResponse::new(
        entries,
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/donor-wall/grouped
///
/// Visible entries grouped by tier, highest tier first. Empty tiers are
/// included so the page layout stays stable.
pub async fn grouped(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DonorTierGroup>>>> {
    let entries = DonorWallRepo::list_visible(&state.pool).await?;
    Ok(Json(DataResponse {
        data: group_by_tier(entries),
    }))
}

fn group_by_tier(entries: Vec<DonorWallEntry>) -> Vec<DonorTierGroup> {
    let mut groups: Vec<DonorTierGroup> = TIER_ORDER
        .iter()
        .map(|tier| DonorTierGroup {
            tier: tier.as_str(),
            label: tier.label(),
            entries: Vec::new(),
        })
        .collect();

    for entry in entries {
        if let Some(group) = groups.iter_mut().find(|g| g.tier == entry.tier) {
            group.entries.push(entry);
        }
    }
    groups
}

/// GET /api/v1/donor-wall/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DonorWallEntry>>> {
    let entry = DonorWallRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/donor-wall/{id}
///
/// Changing the amount re-derives the tier.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDonorWallEntry>,
) -> AppResult<Json<DataResponse<DonorWallEntry>>> {
    validate_input(&input)?;
    let entry = DonorWallRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(entry_id = id, tier = %entry.tier, "Donor wall entry updated");
    Ok(Json(DataResponse { data: entry }))
}

/// PATCH /api/v1/donor-wall/{id}/toggle-visibility
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DonorWallEntry>>> {
    let entry = DonorWallRepo::toggle_visibility(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(entry_id = id, is_visible = entry.is_visible, "Donor wall entry toggled");
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/donor-wall/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DonorWallRepo::delete(&state.pool, id).await? {
        tracing::info!(entry_id = id, "Donor wall entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
