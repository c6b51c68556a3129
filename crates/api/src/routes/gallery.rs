//! Route definitions for the video and photo galleries.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{gallery_photo, gallery_video};
use crate::state::AppState;

/// Gallery routes mounted at `/gallery`.
///
/// ```text
/// GET    /videos                       -> gallery_video::list
/// POST   /videos                       -> gallery_video::create
/// GET    /videos/{id}                  -> gallery_video::get_by_id
/// PUT    /videos/{id}                  -> gallery_video::update
/// DELETE /videos/{id}                  -> gallery_video::delete
/// POST   /videos/{id}/view             -> gallery_video::record_view
/// PATCH  /videos/{id}/toggle-active    -> gallery_video::toggle_active
///
/// GET    /photos                       -> gallery_photo::list
/// POST   /photos                       -> gallery_photo::upload (multipart)
/// GET    /photos/{id}                  -> gallery_photo::get_by_id
/// PUT    /photos/{id}                  -> gallery_photo::update
/// DELETE /photos/{id}                  -> gallery_photo::delete
/// POST   /photos/{id}/view             -> gallery_photo::record_view
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", get(gallery_video::list).post(gallery_video::create))
        .route(
            "/videos/{id}",
            get(gallery_video::get_by_id)
                .put(gallery_video::update)
                .delete(gallery_video::delete),
        )
        .route("/videos/{id}/view", post(gallery_video::record_view))
        .route(
            "/videos/{id}/toggle-active",
            patch(gallery_video::toggle_active),
        )
        .route("/photos", get(gallery_photo::list).post(gallery_photo::upload))
        .route(
            "/photos/{id}",
            get(gallery_photo::get_by_id)
                .put(gallery_photo::update)
                .delete(gallery_photo::delete),
        )
        .route("/photos/{id}/view", post(gallery_photo::record_view))
}
