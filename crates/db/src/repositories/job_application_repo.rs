//! Repository for the `job_applications` table.

use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::careers::{CreateJobApplication, JobApplication};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, job_id, applicant_name, email, phone, cover_letter, resume_path, \
     status, created_at, updated_at";

/// Provides storage for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Insert an application in `received` status.
    pub async fn create(
        pool: &PgPool,
        job_id: DbId,
        input: &CreateJobApplication,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications
                (job_id, applicant_name, email, phone, cover_letter, resume_path)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_id)
            .bind(&input.applicant_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.cover_letter)
            .bind(&input.resume_path)
            .fetch_one(pool)
            .await
    }

    /// Find an application by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_applications WHERE id = $1");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List applications for a job, newest first.
    pub async fn list_by_job(
        pool: &PgPool,
        job_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications WHERE job_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }

    /// Set the review status of an application.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application, returning it so the caller can remove the
    /// resume file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("DELETE FROM job_applications WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
