//! Route definitions for job openings and applications.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::careers;
use crate::state::AppState;

/// Routes mounted at `/careers`.
///
/// ```text
/// GET    /jobs                         -> list_jobs (?active_only, department)
/// POST   /jobs                         -> create_job
/// GET    /jobs/{id}                    -> get_job
/// PUT    /jobs/{id}                    -> update_job
/// DELETE /jobs/{id}                    -> delete_job
/// PATCH  /jobs/{id}/toggle-active      -> toggle_job
/// GET    /jobs/{id}/applications       -> list_applications
/// POST   /jobs/{id}/applications       -> apply (multipart)
/// GET    /applications/{id}            -> get_application
/// DELETE /applications/{id}            -> delete_application
/// PATCH  /applications/{id}/status     -> update_application_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(careers::list_jobs).post(careers::create_job))
        .route(
            "/jobs/{id}",
            get(careers::get_job)
                .put(careers::update_job)
                .delete(careers::delete_job),
        )
        .route("/jobs/{id}/toggle-active", patch(careers::toggle_job))
        .route(
            "/jobs/{id}/applications",
            get(careers::list_applications).post(careers::apply),
        )
        .route(
            "/applications/{id}",
            get(careers::get_application).delete(careers::delete_application),
        )
        .route(
            "/applications/{id}/status",
            patch(careers::update_application_status),
        )
}
