//! Aggregate figures for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Counts and totals across every collection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub campaigns_total: i64,
    pub campaigns_active: i64,
    pub donations_total: i64,
    pub donations_completed: i64,
    pub donations_pending: i64,
    /// Sum of completed cash donations.
    pub amount_raised: f64,
    pub grocery_donations_total: i64,
    /// Sum of completed grocery-kit totals.
    pub grocery_amount_raised: f64,
    pub donor_wall_entries: i64,
    pub gallery_videos: i64,
    pub gallery_photos: i64,
    pub forms_total: i64,
    pub form_submissions: i64,
    pub job_openings_active: i64,
    pub job_applications: i64,
}
