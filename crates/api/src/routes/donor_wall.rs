//! Route definitions for the donor wall.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::donor_wall;
use crate::state::AppState;

/// Routes mounted at `/donor-wall`.
///
/// ```text
/// GET    /                          -> list (?visible_only, tier, limit, offset)
/// POST   /                          -> create
/// GET    /grouped                   -> grouped
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// PATCH  /{id}/toggle-visibility    -> toggle_visibility
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(donor_wall::list).post(donor_wall::create))
        .route("/grouped", get(donor_wall::grouped))
        .route(
            "/{id}",
            get(donor_wall::get_by_id)
                .put(donor_wall::update)
                .delete(donor_wall::delete),
        )
        .route("/{id}/toggle-visibility", patch(donor_wall::toggle_visibility))
}
