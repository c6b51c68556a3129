//! Cross-table aggregates for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Provides read-only dashboard queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Gather counts and completed totals in one round trip.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        sqlx::query_as::<_, DashboardSummary>(
            "SELECT
                (SELECT COUNT(*) FROM campaigns) AS campaigns_total,
                (SELECT COUNT(*) FROM campaigns WHERE is_active) AS campaigns_active,
                (SELECT COUNT(*) FROM donations) AS donations_total,
                (SELECT COUNT(*) FROM donations WHERE payment_status = 'completed')
                    AS donations_completed,
                (SELECT COUNT(*) FROM donations WHERE payment_status = 'pending')
                    AS donations_pending,
                (SELECT COALESCE(SUM(amount), 0) FROM donations
                    WHERE payment_status = 'completed') AS amount_raised,
                (SELECT COUNT(*) FROM grocery_donations) AS grocery_donations_total,
                (SELECT COALESCE(SUM(total), 0) FROM grocery_donations
                    WHERE payment_status = 'completed') AS grocery_amount_raised,
                (SELECT COUNT(*) FROM donor_wall_entries) AS donor_wall_entries,
                (SELECT COUNT(*) FROM gallery_videos) AS gallery_videos,
                (SELECT COUNT(*) FROM gallery_photos) AS gallery_photos,
                (SELECT COUNT(*) FROM forms) AS forms_total,
                (SELECT COUNT(*) FROM form_submissions) AS form_submissions,
                (SELECT COUNT(*) FROM job_openings WHERE is_active) AS job_openings_active,
                (SELECT COUNT(*) FROM job_applications) AS job_applications",
        )
        .fetch_one(pool)
        .await
    }
}
