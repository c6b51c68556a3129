//! Repository for the `campaigns` table.

use hkv_core::pagination::clamp_page;
use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{Campaign, CampaignListParams, CreateCampaign, UpdateCampaign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, category, goal_amount, raised_amount, \
     donor_count, deadline, donation_options, image_path, is_active, created_at, updated_at";

/// Filter shared by `list` and `count`.
const LIST_FILTER: &str = "WHERE ($1::BOOL IS FALSE OR is_active = TRUE) \
       AND ($2::TEXT IS NULL OR category = $2)";

/// Provides CRUD operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign with an already-resolved slug.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCampaign,
        slug: &str,
    ) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns
                (title, slug, description, category, goal_amount, deadline,
                 donation_options, image_path, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '{{}}'::DOUBLE PRECISION[]), $8,
                     COALESCE($9, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.goal_amount)
            .bind(input.deadline)
            .bind(&input.donation_options)
            .bind(&input.image_path)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a campaign by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a campaign by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE slug = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List campaigns, newest first.
    pub async fn list(
        pool: &PgPool,
        params: &CampaignListParams,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let (limit, offset) = clamp_page(params.limit, params.offset);
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns {LIST_FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(params.active_only)
            .bind(&params.category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count campaigns matching the same filters as [`CampaignRepo::list`].
    pub async fn count(pool: &PgPool, params: &CampaignListParams) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM campaigns {LIST_FILTER}");
        sqlx::query_scalar(&query)
            .bind(params.active_only)
            .bind(&params.category)
            .fetch_one(pool)
            .await
    }

    /// Update a campaign. Only non-`None` fields in `input` are applied;
    /// `slug` overrides `input.slug` when the caller has already resolved it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampaign,
        slug: Option<&str>,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                goal_amount = COALESCE($6, goal_amount),
                deadline = COALESCE($7, deadline),
                donation_options = COALESCE($8, donation_options),
                image_path = COALESCE($9, image_path),
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.goal_amount)
            .bind(input.deadline)
            .bind(&input.donation_options)
            .bind(&input.image_path)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`, returning the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET is_active = NOT is_active WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a campaign. Donations keep their rows with `campaign_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
