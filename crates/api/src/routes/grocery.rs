//! Route definitions for grocery kits: the item catalogue and kit donations.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::grocery;
use crate::state::AppState;

/// Catalogue routes mounted at `/grocery-items`.
///
/// ```text
/// GET    /        -> list_items (?active_only)
/// POST   /        -> create_item
/// GET    /{id}    -> get_item
/// PUT    /{id}    -> update_item
/// DELETE /{id}    -> delete_item
/// ```
pub fn items_router() -> Router<AppState> {
    Router::new()
        .route("/", get(grocery::list_items).post(grocery::create_item))
        .route(
            "/{id}",
            get(grocery::get_item)
                .put(grocery::update_item)
                .delete(grocery::delete_item),
        )
}

/// Donation routes mounted at `/grocery-donations`.
///
/// ```text
/// GET    /               -> list_donations (?status, limit, offset)
/// POST   /               -> checkout
/// POST   /quote          -> quote
/// GET    /{id}           -> get_donation
/// DELETE /{id}           -> delete_donation
/// PATCH  /{id}/status    -> update_donation_status
/// ```
pub fn donations_router() -> Router<AppState> {
    Router::new()
        .route("/", get(grocery::list_donations).post(grocery::checkout))
        .route("/quote", post(grocery::quote))
        .route(
            "/{id}",
            get(grocery::get_donation).delete(grocery::delete_donation),
        )
        .route("/{id}/status", patch(grocery::update_donation_status))
}
