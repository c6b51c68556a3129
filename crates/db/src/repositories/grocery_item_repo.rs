//! Repository for the `grocery_items` catalogue.

use hkv_core::types::DbId;
use sqlx::PgPool;

use crate::models::grocery::{CreateGroceryItem, GroceryItem, UpdateGroceryItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, unit, unit_price, description, image_path, is_active, \
     sort_order, created_at, updated_at";

/// Provides CRUD operations for catalogue items.
pub struct GroceryItemRepo;

impl GroceryItemRepo {
    /// Insert a new catalogue item.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGroceryItem,
    ) -> Result<GroceryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO grocery_items
                (name, unit, unit_price, description, image_path, is_active, sort_order)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(&input.name)
            .bind(&input.unit)
            .bind(input.unit_price)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a catalogue item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GroceryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grocery_items WHERE id = $1");
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the catalogue in display order.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<GroceryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grocery_items
             WHERE ($1::BOOL IS FALSE OR is_active = TRUE)
             ORDER BY sort_order ASC, name ASC"
        );
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    /// Fetch the active items among `ids`. Missing or inactive ids are
    /// simply absent from the result.
    pub async fn find_active_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<GroceryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grocery_items WHERE id = ANY($1) AND is_active = TRUE"
        );
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Update a catalogue item. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGroceryItem,
    ) -> Result<Option<GroceryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE grocery_items SET
                name = COALESCE($2, name),
                unit = COALESCE($3, unit),
                unit_price = COALESCE($4, unit_price),
                description = COALESCE($5, description),
                image_path = COALESCE($6, image_path),
                is_active = COALESCE($7, is_active),
                sort_order = COALESCE($8, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GroceryItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.unit)
            .bind(input.unit_price)
            .bind(&input.description)
            .bind(&input.image_path)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a catalogue item. Past donations keep their priced line copies.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grocery_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
