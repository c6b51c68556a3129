//! Donor wall entity model and DTOs.

use chrono::NaiveDate;
use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `donor_wall_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DonorWallEntry {
    pub id: DbId,
    pub donor_name: String,
    pub amount: f64,
    pub tier: String,
    pub message: Option<String>,
    pub location: Option<String>,
    pub is_visible: bool,
    pub display_order: i32,
    pub donated_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a donor to the wall. The tier is derived from `amount`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDonorWallEntry {
    #[validate(length(min = 1, max = 200))]
    pub donor_name: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(length(max = 500))]
    pub message: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
    pub donated_on: Option<NaiveDate>,
}

/// DTO for updating a wall entry. Changing `amount` re-derives the tier.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDonorWallEntry {
    #[validate(length(min = 1, max = 200))]
    pub donor_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,
    #[validate(length(max = 500))]
    pub message: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub is_visible: Option<bool>,
    pub display_order: Option<i32>,
    pub donated_on: Option<NaiveDate>,
}

/// Filters for listing wall entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonorWallListParams {
    #[serde(default)]
    pub visible_only: bool,
    pub tier: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Visible entries of one tier, as shown on the public wall.
#[derive(Debug, Clone, Serialize)]
pub struct DonorTierGroup {
    pub tier: &'static str,
    pub label: &'static str,
    pub entries: Vec<DonorWallEntry>,
}
