//! Route definitions for cash donations.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::donation;
use crate::state::AppState;

/// Routes mounted at `/donations`.
///
/// ```text
/// GET    /                -> list (?status, campaign_id, limit, offset)
/// POST   /                -> create
/// GET    /stats           -> stats
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// PATCH  /{id}/status     -> update_status
/// GET    /{id}/receipt    -> receipt (text/html)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(donation::list).post(donation::create))
        .route("/stats", get(donation::stats))
        .route(
            "/{id}",
            get(donation::get_by_id)
                .put(donation::update)
                .delete(donation::delete),
        )
        .route("/{id}/status", patch(donation::update_status))
        .route("/{id}/receipt", get(donation::receipt))
}
