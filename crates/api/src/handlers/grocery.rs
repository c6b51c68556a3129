//! Handlers for the grocery-kit catalogue (`/grocery-items`) and grocery-kit
//! donations (`/grocery-donations`).
//!
//! Prices and totals are always recomputed from the catalogue; any amounts a
//! client sends are ignored.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hkv_core::error::CoreError;
use hkv_core::grocery::{compute_totals, validate_selection, GroceryTotals, KitSelection};
use hkv_core::payment::{ensure_transition, PaymentStatus};
use hkv_core::types::DbId;
use hkv_db::models::grocery::{
    CreateGroceryDonation, CreateGroceryItem, GroceryDonation, GroceryDonationListParams,
    GroceryItem, GroceryQuoteRequest, UpdateGroceryDonationStatus, UpdateGroceryItem,
};
use hkv_db::repositories::{GroceryDonationRepo, GroceryItemRepo};

use crate::error::{validate_input, AppError, AppResult};
use crate::query::ActiveOnlyParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

fn item_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GroceryItem",
        id,
    })
}

fn donation_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "GroceryDonation",
        id,
    })
}

/// Price a kit against the active catalogue.
async fn price_selection(state: &AppState, selection: &[KitSelection]) -> AppResult<GroceryTotals> {
    validate_selection(selection)?;
    let ids: Vec<DbId> = selection.iter().map(|line| line.item_id).collect();
    let catalogue: Vec<_> = GroceryItemRepo::find_active_by_ids(&state.pool, &ids)
        .await?
        .iter()
        .map(GroceryItem::priced)
        .collect();
    Ok(compute_totals(
        selection,
        &catalogue,
        state.config.grocery_fee_percent,
    )?)
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// POST /api/v1/grocery-items
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateGroceryItem>,
) -> AppResult<(StatusCode, Json<DataResponse<GroceryItem>>)> {
    validate_input(&input)?;
    let item = GroceryItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = item.id, name = %item.name, "Grocery item created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/grocery-items
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ActiveOnlyParams>,
) -> AppResult<Json<DataResponse<Vec<GroceryItem>>>> {
    let items = GroceryItemRepo::list(&state.pool, params.active_only).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/grocery-items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GroceryItem>>> {
    let item = GroceryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/grocery-items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGroceryItem>,
) -> AppResult<Json<DataResponse<GroceryItem>>> {
    validate_input(&input)?;
    let item = GroceryItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| item_not_found(id))?;
    tracing::info!(item_id = id, "Grocery item updated");
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/grocery-items/{id}
///
/// Past donations keep their priced snapshot of the item.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GroceryItemRepo::delete(&state.pool, id).await? {
        tracing::info!(item_id = id, "Grocery item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(item_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

/// POST /api/v1/grocery-donations/quote
///
/// Compute the totals for a kit without persisting anything.
pub async fn quote(
    State(state): State<AppState>,
    Json(input): Json<GroceryQuoteRequest>,
) -> AppResult<Json<DataResponse<GroceryTotals>>> {
    let totals = price_selection(&state, &input.items).await?;
    Ok(Json(DataResponse { data: totals }))
}

/// POST /api/v1/grocery-donations
pub async fn checkout(
    State(state): State<AppState>,
    Json(input): Json<CreateGroceryDonation>,
) -> AppResult<(StatusCode, Json<DataResponse<GroceryDonation>>)> {
    validate_input(&input)?;
    let totals = price_selection(&state, &input.items).await?;

    let donation = GroceryDonationRepo::create(&state.pool, &input, &totals).await?;
    tracing::info!(
        grocery_donation_id = donation.id,
        lines = totals.items.len(),
        total = donation.total,
        "Grocery donation recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: donation })))
}

/// GET /api/v1/grocery-donations
pub async fn list_donations(
    State(state): State<AppState>,
    Query(params): Query<GroceryDonationListParams>,
) -> AppResult<Json<PageResponse<GroceryDonation>>> {
    if let Some(status) = &params.status {
        PaymentStatus::from_str(status)?;
    }
    let donations = GroceryDonationRepo::list(&state.pool, &params).await?;
    let total = GroceryDonationRepo::count(&state.pool, &params).await?;
    Ok(Json(PageResponse::new(
        donations,
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/grocery-donations/{id}
pub async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GroceryDonation>>> {
    let donation = GroceryDonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| donation_not_found(id))?;
    Ok(Json(DataResponse { data: donation }))
}

/// PATCH /api/v1/grocery-donations/{id}/status
pub async fn update_donation_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGroceryDonationStatus>,
) -> AppResult<Json<DataResponse<GroceryDonation>>> {
    let next = PaymentStatus::from_str(input.status.trim())?;

    let existing = GroceryDonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| donation_not_found(id))?;
    let current = PaymentStatus::from_str(&existing.payment_status)?;
    ensure_transition(current, next)?;

    let donation = GroceryDonationRepo::update_status(
        &state.pool,
        id,
        current,
        next,
        input.gateway_payment_id.as_deref(),
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Grocery donation {id} changed status concurrently, retry the update"
        )))
    })?;

    tracing::info!(
        grocery_donation_id = id,
        from = current.as_str(),
        to = next.as_str(),
        "Grocery donation status changed",
    );

    Ok(Json(DataResponse { data: donation }))
}

/// DELETE /api/v1/grocery-donations/{id}
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GroceryDonationRepo::delete(&state.pool, id).await? {
        tracing::info!(grocery_donation_id = id, "Grocery donation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(donation_not_found(id))
    }
}
