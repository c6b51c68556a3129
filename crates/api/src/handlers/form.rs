//! Handlers for dynamic forms (`/forms`) and their submissions.
//!
//! Definitions are checked with the form engine before they are saved, so
//! stored patterns always compile and conditional rules always point at a
//! declared field. Submissions are validated against the visible fields only
//! and stored without the values of hidden fields.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hkv_core::campaign::{resolve_slug, validate_slug};
use hkv_core::error::CoreError;
use hkv_core::forms::{
    prune_to_visible, validate_definition, validate_submission, visible_field_names, FieldErrors,
    FormField, FormValues,
};
use hkv_core::types::DbId;
use hkv_db::models::form::{
    CreateForm, CreateFormSubmission, Form, FormListParams, FormSubmission, UpdateForm,
};
use hkv_db::repositories::{FormRepo, FormSubmissionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{validate_input, AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Body of `POST /forms/validate`: an unsaved definition plus values.
#[derive(Debug, Deserialize)]
pub struct DryRunRequest {
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub values: FormValues,
}

/// Body of `POST /forms/{id}/evaluate`.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub values: FormValues,
}

/// Which fields are visible for the given values and which of them fail.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub visible_fields: Vec<String>,
    pub errors: FieldErrors,
    pub is_valid: bool,
}

fn evaluate_fields(fields: &[FormField], values: &FormValues) -> Evaluation {
    let errors = validate_submission(fields, values);
    Evaluation {
        visible_fields: visible_field_names(fields, values),
        is_valid: errors.is_empty(),
        errors,
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Form", id })
}

async fn ensure_form(state: &AppState, id: DbId) -> AppResult<Form> {
    FormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// POST /api/v1/forms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Form>>)> {
    validate_input(&input)?;
    validate_definition(&input.fields)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.name, "form")?;

    let form = FormRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(form_id = form.id, slug = %form.slug, fields = form.fields.0.len(), "Form created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: form })))
}

/// GET /api/v1/forms
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FormListParams>,
) -> AppResult<Json<DataResponse<Vec<Form>>>> {
    let forms = FormRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// GET /api/v1/forms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Form>>> {
    let form = ensure_form(&state, id).await?;
    Ok(Json(DataResponse { data: form }))
}

/// GET /api/v1/forms/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Form>>> {
    let form = FormRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Form with slug '{slug}' not found")))?;
    Ok(Json(DataResponse { data: form }))
}

/// PUT /api/v1/forms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateForm>,
) -> AppResult<Json<DataResponse<Form>>> {
    validate_input(&input)?;
    if let Some(fields) = &input.fields {
        validate_definition(fields)?;
    }
    let slug = input.slug.as_deref().map(str::trim);
    if let Some(slug) = slug {
        validate_slug(slug)?;
    }

    let form = FormRepo::update(&state.pool, id, &input, slug)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(form_id = id, "Form updated");
    Ok(Json(DataResponse { data: form }))
}

/// PATCH /api/v1/forms/{id}/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Form>>> {
    let form = FormRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(form_id = id, is_active = form.is_active, "Form toggled");
    Ok(Json(DataResponse { data: form }))
}

/// DELETE /api/v1/forms/{id}
///
/// Submissions are deleted with the form.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FormRepo::delete(&state.pool, id).await? {
        tracing::info!(form_id = id, "Form deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Rule evaluation
// ---------------------------------------------------------------------------

/// POST /api/v1/forms/validate
///
/// Dry run for the form builder: checks an unsaved definition, then
/// evaluates it against sample values.
pub async fn dry_run(Json(input): Json<DryRunRequest>) -> AppResult<Json<DataResponse<Evaluation>>> {
    validate_definition(&input.fields)?;
    Ok(Json(DataResponse {
        data: evaluate_fields(&input.fields, &input.values),
    }))
}

/// POST /api/v1/forms/{id}/evaluate
///
/// Visible fields and current errors for a partially filled form.
pub async fn evaluate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EvaluateRequest>,
) -> AppResult<Json<DataResponse<Evaluation>>> {
    let form = ensure_form(&state, id).await?;
    Ok(Json(DataResponse {
        data: evaluate_fields(&form.fields.0, &input.values),
    }))
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

/// POST /api/v1/forms/{id}/submissions
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateFormSubmission>,
) -> AppResult<(StatusCode, Json<DataResponse<FormSubmission>>)> {
    let form = ensure_form(&state, id).await?;
    if !form.is_active {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Form '{}' is not accepting submissions",
            form.name
        ))));
    }

    let errors = validate_submission(&form.fields.0, &input.data);
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::InvalidFields(errors)));
    }

    let data = prune_to_visible(&form.fields.0, &input.data);
    let submission = FormSubmissionRepo::create(&state.pool, id, &data).await?;
    tracing::info!(form_id = id, submission_id = submission.id, "Form submission stored");

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/forms/{id}/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<FormSubmission>>> {
    ensure_form(&state, id).await?;
    let submissions =
        FormSubmissionRepo::list_by_form(&state.pool, id, params.limit, params.offset).await?;
    let total = FormSubmissionRepo::count_by_form(&state.pool, id).await?;
    Ok(Json(PageResponse::new(
        submissions,
        total,
        params.limit,
        params.offset,
    )))
}

/// GET /api/v1/forms/{form_id}/submissions/{id}
pub async fn get_submission(
    State(state): State<AppState>,
    Path((form_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<FormSubmission>>> {
    let submission = FormSubmissionRepo::find_by_id(&state.pool, form_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FormSubmission",
            id,
        }))?;
    Ok(Json(DataResponse { data: submission }))
}

/// DELETE /api/v1/forms/{form_id}/submissions/{id}
pub async fn delete_submission(
    State(state): State<AppState>,
    Path((form_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if FormSubmissionRepo::delete(&state.pool, form_id, id).await? {
        tracing::info!(form_id, submission_id = id, "Form submission deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FormSubmission",
            id,
        }))
    }
}
