pub mod campaigns;
pub mod careers;
pub mod dashboard;
pub mod donations;
pub mod donor_wall;
pub mod forms;
pub mod gallery;
pub mod grocery;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns                             list, create
/// /campaigns/slug/{slug}                 lookup by slug
/// /campaigns/{id}                        get, update, delete
/// /campaigns/{id}/toggle-active          toggle (PATCH)
///
/// /donations                             list, create
/// /donations/stats                       totals by status
/// /donations/{id}                        get, update, delete
/// /donations/{id}/status                 payment status transition (PATCH)
/// /donations/{id}/receipt                HTML receipt for completed donations
///
/// /donor-wall                            list, create
/// /donor-wall/grouped                    visible entries grouped by tier
/// /donor-wall/{id}                       get, update, delete
/// /donor-wall/{id}/toggle-visibility     toggle (PATCH)
///
/// /grocery-items                         list, create
/// /grocery-items/{id}                    get, update, delete
/// /grocery-donations                     list, checkout
/// /grocery-donations/quote               price a kit (POST)
/// /grocery-donations/{id}                get, delete
/// /grocery-donations/{id}/status         payment status transition (PATCH)
///
/// /gallery/videos                        list, create
/// /gallery/videos/{id}                   get, update, delete
/// /gallery/videos/{id}/view              count a view (POST)
/// /gallery/videos/{id}/toggle-active     toggle (PATCH)
/// /gallery/photos                        list, upload (multipart)
/// /gallery/photos/{id}                   get, update, delete
/// /gallery/photos/{id}/view              count a view (POST)
///
/// /forms                                 list, create
/// /forms/validate                        dry run of an unsaved definition
/// /forms/slug/{slug}                     lookup by slug
/// /forms/{id}                            get, update, delete
/// /forms/{id}/toggle-active              toggle (PATCH)
/// /forms/{id}/evaluate                   visible fields + errors for values
/// /forms/{id}/submissions                list, submit
/// /forms/{id}/submissions/{sid}          get, delete
///
/// /careers/jobs                          list, create
/// /careers/jobs/{id}                     get, update, delete
/// /careers/jobs/{id}/toggle-active       toggle (PATCH)
/// /careers/jobs/{id}/applications        list, apply (multipart)
/// /careers/applications/{id}             get, delete
/// /careers/applications/{id}/status      review status (PATCH)
///
/// /dashboard/summary                     admin counts and totals
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Fundraising campaigns and cash donations.
        .nest("/campaigns", campaigns::router())
        .nest("/donations", donations::router())
        // Public donor wall.
        .nest("/donor-wall", donor_wall::router())
        // Grocery-kit catalogue and kit donations.
        .nest("/grocery-items", grocery::items_router())
        .nest("/grocery-donations", grocery::donations_router())
        // Video and photo galleries.
        .nest("/gallery", gallery::router())
        // Dynamic forms, rule evaluation and submissions.
        .nest("/forms", forms::router())
        // Job openings and applications.
        .nest("/careers", careers::router())
        // Admin dashboard.
        .nest("/dashboard", dashboard::router())
}
