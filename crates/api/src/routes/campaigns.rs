//! Route definitions for fundraising campaigns.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// GET    /                      -> list (?active_only, category, limit, offset)
/// POST   /                      -> create
/// GET    /slug/{slug}           -> get_by_slug
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// PATCH  /{id}/toggle-active    -> toggle_active
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaign::list).post(campaign::create))
        .route("/slug/{slug}", get(campaign::get_by_slug))
        .route(
            "/{id}",
            get(campaign::get_by_id)
                .put(campaign::update)
                .delete(campaign::delete),
        )
        .route("/{id}/toggle-active", patch(campaign::toggle_active))
}
