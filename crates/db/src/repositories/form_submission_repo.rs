//! Repository for the `form_submissions` table.

use hkv_core::forms::FormValues;
use hkv_core::pagination::clamp_page;
use hkv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::form::FormSubmission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, form_id, data, created_at, updated_at";

/// Provides storage for accepted form submissions.
pub struct FormSubmissionRepo;

impl FormSubmissionRepo {
    /// Store already-validated, pruned submission values.
    pub async fn create(
        pool: &PgPool,
        form_id: DbId,
        data: &FormValues,
    ) -> Result<FormSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_submissions (form_id, data) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(form_id)
            .bind(Json(data))
            .fetch_one(pool)
            .await
    }

    /// Find a submission belonging to `form_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        form_id: DbId,
        id: DbId,
    ) -> Result<Option<FormSubmission>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM form_submissions WHERE id = $1 AND form_id = $2");
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(id)
            .bind(form_id)
            .fetch_optional(pool)
            .await
    }

    /// List a form's submissions, newest first.
    pub async fn list_by_form(
        pool: &PgPool,
        form_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<FormSubmission>, sqlx::Error> {
        let (limit, offset) = clamp_page(limit, offset);
        let query = format!(
            "SELECT {COLUMNS} FROM form_submissions WHERE form_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(form_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count a form's submissions.
    pub async fn count_by_form(pool: &PgPool, form_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM form_submissions WHERE form_id = $1")
            .bind(form_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a submission belonging to `form_id`.
    pub async fn delete(pool: &PgPool, form_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM form_submissions WHERE id = $1 AND form_id = $2")
            .bind(id)
            .bind(form_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
