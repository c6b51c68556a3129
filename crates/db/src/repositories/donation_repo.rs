//! Repository for the `donations` table.
//!
//! Status changes run in a transaction together with the linked campaign's
//! `raised_amount` / `donor_count`, so a donation is counted exactly once.

use chrono::{Datelike, Utc};
use hkv_core::pagination::clamp_page;
use hkv_core::payment::{receipt_number, PaymentStatus};
use hkv_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::donation::{
    CreateDonation, Donation, DonationListParams, DonationStats, UpdateDonation,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campaign_id, donor_name, donor_email, donor_phone, pan_number, \
     address, seva_type, amount, currency, payment_status, gateway_order_id, \
     gateway_payment_id, is_anonymous, message, receipt_number, completed_at, \
     created_at, updated_at";

/// Filter shared by `list` and `count`.
const LIST_FILTER: &str = "WHERE ($1::TEXT IS NULL OR payment_status = $1) \
       AND ($2::BIGINT IS NULL OR campaign_id = $2)";

/// Provides CRUD and payment-status operations for donations.
pub struct DonationRepo;

impl DonationRepo {
    /// Insert a new donation in `pending` status.
    pub async fn create(pool: &PgPool, input: &CreateDonation) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations
                (campaign_id, donor_name, donor_email, donor_phone, pan_number, address,
                 seva_type, amount, currency, gateway_order_id, is_anonymous, message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'INR'), $10,
                     COALESCE($11, FALSE), $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(input.campaign_id)
            .bind(&input.donor_name)
            .bind(&input.donor_email)
            .bind(&input.donor_phone)
            .bind(&input.pan_number)
            .bind(&input.address)
            .bind(&input.seva_type)
            .bind(input.amount)
            .bind(&input.currency)
            .bind(&input.gateway_order_id)
            .bind(input.is_anonymous)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a donation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations WHERE id = $1");
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List donations, newest first.
    pub async fn list(
        pool: &PgPool,
        params: &DonationListParams,
    ) -> Result<Vec<Donation>, sqlx::Error> {
        let (limit, offset) = clamp_page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM donations {LIST_FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(&params.status)
            .bind(params.campaign_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count donations matching the same filters as [`DonationRepo::list`].
    pub async fn count(pool: &PgPool, params: &DonationListParams) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM donations {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(&params.status)
            .bind(params.campaign_id)
            .fetch_one(pool)
            .await
    }

    /// Update donor-facing details. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDonation,
    ) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!(
            "UPDATE donations SET
                donor_name = COALESCE($2, donor_name),
                donor_email = COALESCE($3, donor_email),
                donor_phone = COALESCE($4, donor_phone),
                pan_number = COALESCE($5, pan_number),
                address = COALESCE($6, address),
                seva_type = COALESCE($7, seva_type),
                gateway_order_id = COALESCE($8, gateway_order_id),
                gateway_payment_id = COALESCE($9, gateway_payment_id),
                is_anonymous = COALESCE($10, is_anonymous),
                message = COALESCE($11, message)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .bind(&input.donor_name)
            .bind(&input.donor_email)
            .bind(&input.donor_phone)
            .bind(&input.pan_number)
            .bind(&input.address)
            .bind(&input.seva_type)
            .bind(&input.gateway_order_id)
            .bind(&input.gateway_payment_id)
            .bind(input.is_anonymous)
            .bind(&input.message)
            .fetch_optional(pool)
            .await
    }

    /// Move a donation from `from` to `to`.
    ///
    /// The update only applies while the row is still in `from`; `None` means
    /// the donation is gone or its status changed concurrently. The caller is
    /// responsible for checking that the transition is allowed.
    ///
    /// Completing assigns `completed_at` and a receipt number and credits the
    /// linked campaign; refunding debits it again.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        from: PaymentStatus,
        to: PaymentStatus,
        gateway_payment_id: Option<&str>,
    ) -> Result<Option<Donation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE donations SET
                payment_status = $3,
                gateway_payment_id = COALESCE($4, gateway_payment_id),
                completed_at = CASE
                    WHEN $3 = 'completed' AND completed_at IS NULL THEN NOW()
                    ELSE completed_at END,
                receipt_number = CASE
                    WHEN $3 = 'completed' THEN COALESCE(receipt_number, $5)
                    ELSE receipt_number END
             WHERE id = $1 AND payment_status = $2
             RETURNING {COLUMNS}"
        );
        let donation = sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .bind(gateway_payment_id)
            .bind(receipt_number(Utc::now().year(), id))
            .fetch_optional(&mut *tx)
            .await?;

        let Some(donation) = donation else {
            return Ok(None);
        };

        if from != to {
            if let Some(campaign_id) = donation.campaign_id {
                match to {
                    PaymentStatus::Completed => {
                        Self::credit_campaign(&mut tx, campaign_id, donation.amount).await?;
                    }
                    PaymentStatus::Refunded => {
                        Self::debit_campaign(&mut tx, campaign_id, donation.amount).await?;
                    }
                    PaymentStatus::Pending | PaymentStatus::Failed => {}
                }
            }
        }

        tx.commit().await?;
        Ok(Some(donation))
    }

    /// Aggregate counts and completed amounts.
    pub async fn stats(pool: &PgPool) -> Result<DonationStats, sqlx::Error> {
        sqlx::query_as::<_, DonationStats>(
            "SELECT
                COUNT(*) AS total_count,
                COUNT(*) FILTER (WHERE payment_status = 'pending') AS pending_count,
                COUNT(*) FILTER (WHERE payment_status = 'completed') AS completed_count,
                COUNT(*) FILTER (WHERE payment_status = 'failed') AS failed_count,
                COUNT(*) FILTER (WHERE payment_status = 'refunded') AS refunded_count,
                COALESCE(SUM(amount) FILTER (WHERE payment_status = 'completed'), 0)
                    AS total_amount,
                COALESCE(AVG(amount) FILTER (WHERE payment_status = 'completed'), 0)
                    AS average_amount,
                COUNT(DISTINCT LOWER(donor_email)) FILTER (WHERE payment_status = 'completed')
                    AS unique_donors
             FROM donations",
        )
        .fetch_one(pool)
        .await
    }

    /// Delete a donation. A completed donation is first removed from its
    /// campaign's totals. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed: Option<(Option<DbId>, f64, String)> = sqlx::query_as(
            "DELETE FROM donations WHERE id = $1
             RETURNING campaign_id, amount, payment_status",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((campaign_id, amount, status)) = removed else {
            return Ok(false);
        };

        if let Some(campaign_id) = campaign_id {
            if status == PaymentStatus::Completed.as_str() {
                Self::debit_campaign(&mut tx, campaign_id, amount).await?;
            }
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn credit_campaign(
        tx: &mut Transaction<'_, Postgres>,
        campaign_id: DbId,
        amount: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE campaigns
             SET raised_amount = raised_amount + $2, donor_count = donor_count + 1
             WHERE id = $1",
        )
        .bind(campaign_id)
        .bind(amount)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    async fn debit_campaign(
        tx: &mut Transaction<'_, Postgres>,
        campaign_id: DbId,
        amount: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE campaigns
             SET raised_amount = GREATEST(raised_amount - $2, 0),
                 donor_count = GREATEST(donor_count - 1, 0)
             WHERE id = $1",
        )
        .bind(campaign_id)
        .bind(amount)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
