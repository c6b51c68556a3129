//! Dynamic form definitions and their submissions.

use hkv_core::forms::{FormField, FormValues};
use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Form {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub fields: Json<Vec<FormField>>,
    pub submit_label: Option<String>,
    pub success_message: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a form definition.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Generated from the name when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[validate(length(max = 100))]
    pub submit_label: Option<String>,
    #[validate(length(max = 1000))]
    pub success_message: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a form. `fields` replaces the whole definition.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateForm {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<FormField>>,
    #[validate(length(max = 100))]
    pub submit_label: Option<String>,
    #[validate(length(max = 1000))]
    pub success_message: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for listing forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormListParams {
    #[serde(default)]
    pub active_only: bool,
}

/// A row from the `form_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormSubmission {
    pub id: DbId,
    pub form_id: DbId,
    pub data: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /forms/{id}/submissions`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFormSubmission {
    #[serde(default)]
    pub data: FormValues,
}
