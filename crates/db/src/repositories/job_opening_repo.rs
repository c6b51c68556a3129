//! Repository for the `job_openings` table.

use hkv_core::careers::EMPLOYMENT_FULL_TIME;
use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::careers::{CreateJobOpening, JobListParams, JobOpening, UpdateJobOpening};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, department, location, employment_type, description, \
     requirements, closes_on, is_active, created_at, updated_at";

/// Provides CRUD operations for job openings.
pub struct JobOpeningRepo;

impl JobOpeningRepo {
    /// Insert a new job opening.
    pub async fn create(pool: &PgPool, input: &CreateJobOpening) -> Result<JobOpening, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_openings
                (title, department, location, employment_type, description, requirements,
                 closes_on, is_active)
             VALUES ($1, $2, $3, COALESCE($4, $9), $5, COALESCE($6, '{{}}'::TEXT[]), $7,
                     COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobOpening>(&query)
            .bind(&input.title)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.closes_on)
            .bind(input.is_active)
            .bind(EMPLOYMENT_FULL_TIME)
            .fetch_one(pool)
            .await
    }

    /// Find a job opening by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobOpening>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_openings WHERE id = $1");
        sqlx::query_as::<_, JobOpening>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List job openings, newest first.
    pub async fn list(pool: &PgPool, params: &JobListParams) -> Result<Vec<JobOpening>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_openings
             WHERE ($1::BOOL IS FALSE OR is_active = TRUE)
               AND ($2::TEXT IS NULL OR department = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobOpening>(&query)
            .bind(params.active_only)
            .bind(&params.department)
            .fetch_all(pool)
            .await
    }

    /// Update a job opening. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobOpening,
    ) -> Result<Option<JobOpening>, sqlx::Error> {
        let query = format!(
            "UPDATE job_openings SET
                title = COALESCE($2, title),
                department = COALESCE($3, department),
                location = COALESCE($4, location),
                employment_type = COALESCE($5, employment_type),
                description = COALESCE($6, description),
                requirements = COALESCE($7, requirements),
                closes_on = COALESCE($8, closes_on),
                is_active = COALESCE($9, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobOpening>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.department)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.closes_on)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`, returning the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<JobOpening>, sqlx::Error> {
        let query = format!(
            "UPDATE job_openings SET is_active = NOT is_active WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobOpening>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job opening and, by cascade, its applications.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_openings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
