//! Route definitions for dynamic forms and their submissions.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::form;
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /                                -> list (?active_only)
/// POST   /                                -> create
/// POST   /validate                        -> dry_run
/// GET    /slug/{slug}                     -> get_by_slug
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// PATCH  /{id}/toggle-active              -> toggle_active
/// POST   /{id}/evaluate                   -> evaluate
/// GET    /{id}/submissions                -> list_submissions (?limit, offset)
/// POST   /{id}/submissions                -> submit
/// GET    /{form_id}/submissions/{id}      -> get_submission
/// DELETE /{form_id}/submissions/{id}      -> delete_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form::list).post(form::create))
        .route("/validate", post(form::dry_run))
        .route("/slug/{slug}", get(form::get_by_slug))
        .route(
            "/{id}",
            get(form::get_by_id).put(form::update).delete(form::delete),
        )
        .route("/{id}/toggle-active", patch(form::toggle_active))
        .route("/{id}/evaluate", post(form::evaluate))
        .route(
            "/{id}/submissions",
            get(form::list_submissions).post(form::submit),
        )
        .route(
            "/{id}/submissions/{submission_id}",
            get(form::get_submission).delete(form::delete_submission),
        )
}
