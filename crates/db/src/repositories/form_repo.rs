//! Repository for the `forms` table.

use hkv_core::forms::FormField;
use hkv_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::form::{CreateForm, Form, FormListParams, UpdateForm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, fields, submit_label, success_message, \
     is_active, created_at, updated_at";

/// Provides CRUD operations for dynamic form definitions.
pub struct FormRepo;

impl FormRepo {
    /// Insert a new form with an already-resolved slug. Field definitions
    /// must have been validated by the caller.
    pub async fn create(pool: &PgPool, input: &CreateForm, slug: &str) -> Result<Form, sqlx::Error> {
        let query = format!(
            "INSERT INTO forms
                (name, slug, description, fields, submit_label, success_message, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(Json(&input.fields))
            .bind(&input.submit_label)
            .bind(&input.success_message)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a form by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a form by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE slug = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List forms, newest first.
    pub async fn list(pool: &PgPool, params: &FormListParams) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM forms
             WHERE ($1::BOOL IS FALSE OR is_active = TRUE)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(params.active_only)
            .fetch_all(pool)
            .await
    }

    /// Update a form. `fields`, when given, replaces the whole definition.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForm,
        slug: Option<&str>,
    ) -> Result<Option<Form>, sqlx::Error> {
        let fields: Option<Json<&Vec<FormField>>> = input.fields.as_ref().map(Json);
        let query = format!(
            "UPDATE forms SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                fields = COALESCE($5, fields),
                submit_label = COALESCE($6, submit_label),
                success_message = COALESCE($7, success_message),
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(fields)
            .bind(&input.submit_label)
            .bind(&input.success_message)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active`, returning the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query =
            format!("UPDATE forms SET is_active = NOT is_active WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a form and, by cascade, its submissions.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
