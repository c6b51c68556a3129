//! Handlers for the `/donations` resource.
//!
//! Donations are created `pending`; the payment status then moves through
//! `PATCH /donations/{id}/status`, which is also where completed donations
//! are credited to their campaign and receive a receipt number.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{Datelike, Utc};
use hkv_core::campaign::is_past_deadline;
use hkv_core::error::CoreError;
use hkv_core::payment::{ensure_transition, receipt_number, validate_pan, PaymentStatus};
use hkv_core::receipt::{render_receipt_html, ReceiptData};
use hkv_core::types::DbId;
use hkv_db::models::donation::{
    CreateDonation, Donation, DonationListParams, DonationStats, UpdateDonation,
    UpdateDonationStatus,
};
use hkv_db::repositories::{CampaignRepo, DonationRepo};

use crate::error::{validate_input, AppError, AppResult};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Donation",
        id,
    })
}

/// Trim and uppercase a PAN, then check its format.
fn normalize_pan(pan: &mut Option<String>) -> AppResult<()> {
    if let Some(value) = pan.take() {
        let value = value.trim().to_ascii_uppercase();
        if !value.is_empty() {
            validate_pan(&value)?;
            *pan = Some(value);
        }
    }
    Ok(())
}

/// POST /api/v1/donations
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateDonation>,
) -> AppResult<(StatusCode, Json<DataResponse<Donation>>)> {
    validate_input(&input)?;
    normalize_pan(&mut input.pan_number)?;
    if let Some(currency) = input.currency.as_mut() {
        *currency = currency.to_ascii_uppercase();
    }

    if let Some(campaign_id) = input.campaign_id {
        let campaign = CampaignRepo::find_by_id(&state.pool, campaign_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Campaign",
                id: campaign_id,
            }))?;
        if !campaign.is_active || is_past_deadline(campaign.deadline, Utc::now().date_naive()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Campaign '{}' is not accepting donations",
                campaign.title
            ))));
        }
    }

    let donation = DonationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        donation_id = donation.id,
        campaign_id = ?donation.campaign_id,
        amount = donation.amount,
        "Donation recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: donation })))
}

/// GET /api/v1/donations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DonationListParams>,
) -> AppResult<Json<PageResponse<Donation>>> {
    if let Some(status) = &params.status {
        PaymentStatus::from_str(status)?;
    }
    let donations = DonationRepo::list(&state.pool, &params).await?;
    let total = DonationRepo::count(&state.pool, &params).await?;
    Ok(Json(PageResponse::new(
        donations,
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/donations/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<DonationStats>>> {
    let stats = DonationRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/donations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Donation>>> {
    let donation = DonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: donation }))
}

/// PUT /api/v1/donations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateDonation>,
) -> AppResult<Json<DataResponse<Donation>>> {
    validate_input(&input)?;
    normalize_pan(&mut input.pan_number)?;

    let donation = DonationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(donation_id = id, "Donation updated");

    Ok(Json(DataResponse { data: donation }))
}

/// PATCH /api/v1/donations/{id}/status
///
/// Allowed moves: pending → completed | failed, failed → pending,
/// completed → refunded. Re-applying the current status is accepted.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDonationStatus>,
) -> AppResult<Json<DataResponse<Donation>>> {
    let next = PaymentStatus::from_str(input.status.trim())?;

    let existing = DonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let current = PaymentStatus::from_str(&existing.payment_status)?;
    ensure_transition(current, next)?;

    let donation = DonationRepo::update_status(
        &state.pool,
        id,
        current,
        next,
        input.gateway_payment_id.as_deref(),
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Donation {id} changed status concurrently, retry the update"
        )))
    })?;

    tracing::info!(
        donation_id = id,
        from = current.as_str(),
        to = next.as_str(),
        "Donation status changed",
    );

    Ok(Json(DataResponse { data: donation }))
}

/// GET /api/v1/donations/{id}/receipt
///
/// Printable HTML receipt, available once the donation is completed.
pub async fn receipt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let donation = DonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if donation.payment_status != PaymentStatus::Completed.as_str() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Receipt is only available for completed donations (status: {})",
            donation.payment_status
        ))));
    }

    let campaign_title = match donation.campaign_id {
        Some(campaign_id) => CampaignRepo::find_by_id(&state.pool, campaign_id)
            .await?
            .map(|c| c.title),
        None => None,
    };

    let completed_at = donation.completed_at.unwrap_or(donation.updated_at);
    let data = ReceiptData {
        org_name: state.config.org_name.clone(),
        org_address: state.config.org_address.clone(),
        receipt_number: donation
            .receipt_number
            .clone()
            .unwrap_or_else(|| receipt_number(completed_at.year(), donation.id)),
        date: completed_at.date_naive(),
        donor_name: donation.donor_name,
        donor_email: donation.donor_email,
        donor_address: donation.address,
        pan_number: donation.pan_number,
        seva_type: donation.seva_type,
        campaign_title,
        amount: donation.amount,
        currency: donation.currency,
        payment_reference: donation.gateway_payment_id.or(donation.gateway_order_id),
    };

    Ok(Html(render_receipt_html(&data)))
}

/// DELETE /api/v1/donations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DonationRepo::delete(&state.pool, id).await? {
        tracing::info!(donation_id = id, "Donation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
