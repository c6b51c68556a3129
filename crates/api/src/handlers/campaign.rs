//! Handlers for the `/campaigns` resource.
//!
//! Responses carry the derived `progress_percent` and `is_past_deadline`
//! alongside the stored row so the public site does not recompute them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use hkv_core::campaign::{
    is_past_deadline, progress_percent, resolve_slug, validate_donation_options, validate_slug,
};
use hkv_core::error::CoreError;
use hkv_core::types::DbId;
use hkv_db::models::campaign::{Campaign, CampaignListParams, CreateCampaign, UpdateCampaign};
use hkv_db::repositories::CampaignRepo;
use serde::Serialize;

use crate::error::{validate_input, AppError, AppResult};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// A campaign with its derived progress fields.
#[derive(Debug, Serialize)]
pub struct CampaignView {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub progress_percent: f64,
    pub is_past_deadline: bool,
}

impl From<Campaign> for CampaignView {
    fn from(campaign: Campaign) -> Self {
        let today = Utc::now().date_naive();
        Self {
            progress_percent: progress_percent(campaign.raised_amount, campaign.goal_amount),
            is_past_deadline: is_past_deadline(campaign.deadline, today),
            campaign,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Campaign",
        id,
    })
}

/// POST /api/v1/campaigns
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCampaign>,
) -> AppResult<(StatusCode, Json<DataResponse<CampaignView>>)> {
    validate_input(&input)?;
    if let Some(options) = &input.donation_options {
        validate_donation_options(options)?;
    }
    let slug = resolve_slug(input.slug.as_deref(), &input.title, "campaign")?;

    let campaign = CampaignRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(campaign_id = campaign.id, slug = %campaign.slug, "Campaign created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: campaign.into(),
        }),
    ))
}

/// GET /api/v1/campaigns
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CampaignListParams>,
) -> AppResult<Json<PageResponse<CampaignView>>> {
    let campaigns = CampaignRepo::list(&state.pool, &params).await?;
    let total = CampaignRepo::count(&state.pool, &params).await?;
    Ok(Json(PageResponse::new(
        campaigns.into_iter().map(CampaignView::from).collect(),
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CampaignView>>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: campaign.into(),
    }))
}

/// GET /api/v1/campaigns/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<CampaignView>>> {
    let campaign = CampaignRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Campaign with slug '{slug}' not found")))?;
    Ok(Json(DataResponse {
        data: campaign.into(),
    }))
}

/// PUT /api/v1/campaigns/{id}
///
/// The slug only changes when one is supplied explicitly.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<Json<DataResponse<CampaignView>>> {
    validate_input(&input)?;
    if let Some(options) = &input.donation_options {
        validate_donation_options(options)?;
    }
    let slug = input.slug.as_deref().map(str::trim);
    if let Some(slug) = slug {
        validate_slug(slug)?;
    }

    let campaign = CampaignRepo::update(&state.pool, id, &input, slug)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(campaign_id = id, "Campaign updated");

    Ok(Json(DataResponse {
        data: campaign.into(),
    }))
}

/// PATCH /api/v1/campaigns/{id}/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CampaignView>>> {
    let campaign = CampaignRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(campaign_id = id, is_active = campaign.is_active, "Campaign toggled");

    Ok(Json(DataResponse {
        data: campaign.into(),
    }))
}

/// DELETE /api/v1/campaigns/{id}
///
/// Donations keep their history; their `campaign_id` is cleared.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CampaignRepo::delete(&state.pool, id).await? {
        tracing::info!(campaign_id = id, "Campaign deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
