//! Repository for the `donor_wall_entries` table.

use hkv_core::donor_tier::DonorTier;
use hkv_core::pagination::clamp_page;
use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::donor_wall::{
    CreateDonorWallEntry, DonorWallEntry, DonorWallListParams, UpdateDonorWallEntry,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, donor_name, amount, tier, message, location, is_visible, \
     display_order, donated_on, created_at, updated_at";

/// Filter shared by `list` and `count`.
const LIST_FILTER: &str = "WHERE ($1::BOOL IS FALSE OR is_visible = TRUE) \
       AND ($2::TEXT IS NULL OR tier = $2)";

/// Wall ordering: curated position first, then largest gifts.
const WALL_ORDER: &str = "ORDER BY display_order ASC, amount DESC, id ASC";

/// Provides CRUD operations for donor wall entries.
pub struct DonorWallRepo;

impl DonorWallRepo {
    /// Insert a new entry; the tier is derived from the amount.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDonorWallEntry,
    ) -> Result<DonorWallEntry, sqlx::Error> {
        let tier = DonorTier::from_amount(input.amount);
        let query = format!(
            "INSERT INTO donor_wall_entries
                (donor_name, amount, tier, message, location, is_visible, display_order, donated_on)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), COALESCE($7, 0), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DonorWallEntry>(&query)
            .bind(&input.donor_name)
            .bind(input.amount)
            .bind(tier.as_str())
            .bind(&input.message)
            .bind(&input.location)
            .bind(input.is_visible)
            .bind(input.display_order)
            .bind(input.donated_on)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DonorWallEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donor_wall_entries WHERE id = $1");
        sqlx::query_as::<_, DonorWallEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries in wall order.
    pub async fn list(
        pool: &PgPool,
        params: &DonorWallListParams,
    ) -> Result<Vec<DonorWallEntry>, sqlx::Error> {
        let (limit, offset) = clamp_page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM donor_wall_entries {LIST_FILTER}
             {WALL_ORDER}
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, DonorWallEntry>(&query)
            .bind(params.visible_only)
            .bind(&params.tier)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count entries matching the same filters as [`DonorWallRepo::list`].
    pub async fn count(pool: &PgPool, params: &DonorWallListParams) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM donor_wall_entries {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(params.visible_only)
            .bind(&params.tier)
            .fetch_one(pool)
            .await
    }

    /// All visible entries in wall order, for grouping by tier.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<DonorWallEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM donor_wall_entries WHERE is_visible = TRUE {WALL_ORDER}"
        );
        sqlx::query_as::<_, DonorWallEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an entry. A new amount re-derives the tier.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDonorWallEntry,
    ) -> Result<Option<DonorWallEntry>, sqlx::Error> {
        let tier = input.amount.map(|a| DonorTier::from_amount(a).as_str());
        let query = format!(
            "UPDATE donor_wall_entries SET
                donor_name = COALESCE($2, donor_name),
                amount = COALESCE($3, amount),
                tier = COALESCE($4, tier),
                message = COALESCE($5, message),
                location = COALESCE($6, location),
                is_visible = COALESCE($7, is_visible),
                display_order = COALESCE($8, display_order),
                donated_on = COALESCE($9, donated_on)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DonorWallEntry>(&query)
            .bind(id)
            .bind(&input.donor_name)
            .bind(input.amount)
            .bind(tier)
            .bind(&input.message)
            .bind(&input.location)
            .bind(input.is_visible)
            .bind(input.display_order)
            .bind(input.donated_on)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_visible`, returning the updated row.
    pub async fn toggle_visibility(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DonorWallEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE donor_wall_entries SET is_visible = NOT is_visible
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DonorWallEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM donor_wall_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
