//! Handlers for job openings (`/careers/jobs`) and applications
//! (`/careers/applications`).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use hkv_core::careers::{validate_application_status, validate_employment_type};
use hkv_core::error::CoreError;
use hkv_core::types::DbId;
use hkv_core::uploads::UploadCategory;
use hkv_db::models::careers::{
    CreateJobApplication, CreateJobOpening, JobApplication, JobListParams, JobOpening,
    UpdateApplicationStatus, UpdateJobOpening,
};
use hkv_db::repositories::{JobApplicationRepo, JobOpeningRepo};

use crate::error::{validate_input, AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{remove_upload, save_upload};

fn job_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "JobOpening",
        id,
    })
}

fn application_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "JobApplication",
        id,
    })
}

// ---------------------------------------------------------------------------
// Job openings
// ---------------------------------------------------------------------------

/// POST /api/v1/careers/jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(input): Json<CreateJobOpening>,
) -> AppResult<(StatusCode, Json<DataResponse<JobOpening>>)> {
    validate_input(&input)?;
    if let Some(employment_type) = &input.employment_type {
        validate_employment_type(employment_type)?;
    }
    let job = JobOpeningRepo::create(&state.pool, &input).await?;
    tracing::info!(job_id = job.id, title = %job.title, "Job opening created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// GET /api/v1/careers/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListParams>,
) -> AppResult<Json<DataResponse<Vec<JobOpening>>>> {
    let jobs = JobOpeningRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/careers/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<JobOpening>>> {
    let job = JobOpeningRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| job_not_found(id))?;
    Ok(Json(DataResponse { data: job }))
}

/// PUT /api/v1/careers/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJobOpening>,
) -> AppResult<Json<DataResponse<JobOpening>>> {
    validate_input(&input)?;
    if let Some(employment_type) = &input.employment_type {
        validate_employment_type(employment_type)?;
    }
    let job = JobOpeningRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| job_not_found(id))?;
    tracing::info!(job_id = id, "Job opening updated");
    Ok(Json(DataResponse { data: job }))
}

/// PATCH /api/v1/careers/jobs/{id}/toggle-active
pub async fn toggle_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<JobOpening>>> {
    let job = JobOpeningRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or_else(|| job_not_found(id))?;
    tracing::info!(job_id = id, is_active = job.is_active, "Job opening toggled");
    Ok(Json(DataResponse { data: job }))
}

/// DELETE /api/v1/careers/jobs/{id}
///
/// Applications are deleted with the job; their resumes are removed first.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let applications = JobApplicationRepo::list_by_job(&state.pool, id).await?;
    if !JobOpeningRepo::delete(&state.pool, id).await? {
        return Err(job_not_found(id));
    }

    for resume in applications.iter().filter_map(|a| a.resume_path.as_deref()) {
        remove_upload(&state.config.upload_dir, resume).await;
    }
    tracing::info!(job_id = id, applications = applications.len(), "Job opening deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// GET /api/v1/careers/jobs/{id}/applications
pub async fn list_applications(
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<JobApplication>>>> {
    JobOpeningRepo::find_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| job_not_found(job_id))?;
    let applications = JobApplicationRepo::list_by_job(&state.pool, job_id).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// POST /api/v1/careers/jobs/{id}/applications
///
/// Multipart form with a required `resume` file (`.pdf`, `.doc`, `.docx`)
/// and text fields `applicant_name`, `email`, `phone`, `cover_letter`.
pub async fn apply(
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<JobApplication>>)> {
    let job = JobOpeningRepo::find_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| job_not_found(job_id))?;
    let closed = job
        .closes_on
        .is_some_and(|closes_on| Utc::now().date_naive() > closes_on);
    if !job.is_active || closed {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Job '{}' is not accepting applications",
            job.title
        ))));
    }

    let mut resume: Option<(String, Vec<u8>)> = None;
    let mut input = CreateJobApplication {
        applicant_name: String::new(),
        email: String::new(),
        phone: None,
        cover_letter: None,
        resume_path: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "resume" {
            let filename = field.file_name().unwrap_or("resume").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            resume = Some((filename, data.to_vec()));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match name.as_str() {
            "applicant_name" => input.applicant_name = text.trim().to_string(),
            "email" => input.email = text.trim().to_string(),
            "phone" => input.phone = Some(text.trim().to_string()).filter(|s| !s.is_empty()),
            "cover_letter" => input.cover_letter = Some(text).filter(|s| !s.trim().is_empty()),
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        resume.ok_or_else(|| AppError::BadRequest("Missing required 'resume' field".into()))?;
    validate_input(&input)?;

    let stored = save_upload(
        &state.config.upload_dir,
        UploadCategory::Document,
        &filename,
        &data,
    )
    .await?;
    input.resume_path = Some(stored.relative_path.clone());

    let application = match JobApplicationRepo::create(&state.pool, job_id, &input).await {
        Ok(application) => application,
        Err(e) => {
            remove_upload(&state.config.upload_dir, &stored.relative_path).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        job_id,
        application_id = application.id,
        "Job application received",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/v1/careers/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<JobApplication>>> {
    let application = JobApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| application_not_found(id))?;
    Ok(Json(DataResponse { data: application }))
}

/// PATCH /api/v1/careers/applications/{id}/status
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplicationStatus>,
) -> AppResult<Json<DataResponse<JobApplication>>> {
    let status = input.status.trim();
    validate_application_status(status)?;
    let application = JobApplicationRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(|| application_not_found(id))?;
    tracing::info!(application_id = id, status, "Job application status changed");
    Ok(Json(DataResponse { data: application }))
}

/// DELETE /api/v1/careers/applications/{id}
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let application = JobApplicationRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| application_not_found(id))?;
    if let Some(resume) = &application.resume_path {
        remove_upload(&state.config.upload_dir, resume).await;
    }
    tracing::info!(application_id = id, "Job application deleted");
    Ok(StatusCode::NO_CONTENT)
}
