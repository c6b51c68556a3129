//! Job openings and applications.

use chrono::NaiveDate;
use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `job_openings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobOpening {
    pub id: DbId,
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: String,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub closes_on: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for posting a job opening.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobOpening {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// Defaults to `full_time`.
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub closes_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// DTO for updating a job opening. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobOpening {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub closes_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Filters for listing job openings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobListParams {
    #[serde(default)]
    pub active_only: bool,
    pub department: Option<String>,
}

/// A row from the `job_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub job_id: DbId,
    pub applicant_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    /// Path relative to the upload directory, served under `/uploads`.
    pub resume_path: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for an application. Built by the upload handler from the multipart
/// form; `resume_path` points at the stored file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobApplication {
    #[validate(length(min = 1, max = 200))]
    pub applicant_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 5000))]
    pub cover_letter: Option<String>,
    pub resume_path: Option<String>,
}

/// Body of `PATCH /careers/applications/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationStatus {
    pub status: String,
}
