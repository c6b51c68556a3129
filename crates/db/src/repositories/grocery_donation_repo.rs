//! Repository for the `grocery_donations` table.

use hkv_core::grocery::GroceryTotals;
use hkv_core::pagination::clamp_page;
use hkv_core::payment::PaymentStatus;
use hkv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::grocery::{CreateGroceryDonation, GroceryDonation, GroceryDonationListParams};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, donor_name, donor_email, donor_phone, items, subtotal, \
     platform_fee, total, payment_status, gateway_order_id, gateway_payment_id, notes, \
     created_at, updated_at";

/// Provides CRUD and status operations for grocery-kit donations.
pub struct GroceryDonationRepo;

impl GroceryDonationRepo {
    /// Insert a checkout with server-computed totals.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGroceryDonation,
        totals: &GroceryTotals,
    ) -> Result<GroceryDonation, sqlx::Error> {
        let query = format!(
            "INSERT INTO grocery_donations
                (donor_name, donor_email, donor_phone, items, subtotal, platform_fee, total,
                 gateway_order_id, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GroceryDonation>(&query)
            .bind(&input.donor_name)
            .bind(&input.donor_email)
            .bind(&input.donor_phone)
            .bind(Json(&totals.items))
            .bind(totals.subtotal)
            .bind(totals.platform_fee)
            .bind(totals.total)
            .bind(&input.gateway_order_id)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a grocery donation by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GroceryDonation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grocery_donations WHERE id = $1");
        sqlx::query_as::<_, GroceryDonation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List grocery donations, newest first.
    pub async fn list(
        pool: &PgPool,
        params: &GroceryDonationListParams,
    ) -> Result<Vec<GroceryDonation>, sqlx::Error> {
        let (limit, offset) = clamp_page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM grocery_donations
             WHERE ($1::TEXT IS NULL OR payment_status = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, GroceryDonation>(&query)
            .bind(&params.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count grocery donations matching the status filter.
    pub async fn count(
        pool: &PgPool,
        params: &GroceryDonationListParams,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM grocery_donations
             WHERE ($1::TEXT IS NULL OR payment_status = $1)",
        )
        .bind(&params.status)
        .fetch_one(pool)
        .await
    }

    /// Move a grocery donation from `from` to `to`. `None` means the row is
    /// gone or its status changed concurrently.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        from: PaymentStatus,
        to: PaymentStatus,
        gateway_payment_id: Option<&str>,
    ) -> Result<Option<GroceryDonation>, sqlx::Error> {
        let query = format!(
            "UPDATE grocery_donations SET
                payment_status = $3,
                gateway_payment_id = COALESCE($4, gateway_payment_id)
             WHERE id = $1 AND payment_status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GroceryDonation>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .bind(gateway_payment_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a grocery donation. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grocery_donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
