//! Grocery catalogue and grocery-kit donation models.

use hkv_core::grocery::{GroceryLineItem, KitSelection, PricedItem};
use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `grocery_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroceryItem {
    pub id: DbId,
    pub name: String,
    pub unit: String,
    pub unit_price: f64,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl GroceryItem {
    /// Catalogue view of this item used for pricing a kit.
    pub fn priced(&self) -> PricedItem {
        PricedItem {
            item_id: self.id,
            name: self.name.clone(),
            unit: self.unit.clone(),
            unit_price: self.unit_price,
        }
    }
}

/// DTO for adding an item to the catalogue.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroceryItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub unit: String,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a catalogue item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGroceryItem {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// A row from the `grocery_donations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroceryDonation {
    pub id: DbId,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_phone: Option<String>,
    pub items: Json<Vec<GroceryLineItem>>,
    pub subtotal: f64,
    pub platform_fee: f64,
    pub total: f64,
    pub payment_status: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Checkout request for a grocery kit. Prices and totals are never taken
/// from the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroceryDonation {
    #[validate(length(min = 1, max = 200))]
    pub donor_name: String,
    #[validate(email)]
    pub donor_email: String,
    #[validate(length(max = 20))]
    pub donor_phone: Option<String>,
    #[validate(length(min = 1))]
    pub items: Vec<KitSelection>,
    pub gateway_order_id: Option<String>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// Body of `POST /grocery-donations/quote`.
#[derive(Debug, Clone, Deserialize)]
pub struct GroceryQuoteRequest {
    pub items: Vec<KitSelection>,
}

/// Body of `PATCH /grocery-donations/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGroceryDonationStatus {
    pub status: String,
    pub gateway_payment_id: Option<String>,
}

/// Filters for listing grocery donations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroceryDonationListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
