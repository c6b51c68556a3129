//! Campaign entity model and DTOs.

use chrono::NaiveDate;
use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub goal_amount: f64,
    pub raised_amount: f64,
    pub donor_count: i32,
    pub deadline: Option<NaiveDate>,
    pub donation_options: Vec<f64>,
    pub image_path: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a campaign.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaign {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Generated from the title when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub goal_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub donation_options: Option<Vec<f64>>,
    pub image_path: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a campaign. All fields are optional.
///
/// `raised_amount` and `donor_count` are not editable; they follow completed
/// donations.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCampaign {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub goal_amount: Option<f64>,
    pub deadline: Option<NaiveDate>,
    pub donation_options: Option<Vec<f64>>,
    pub image_path: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for listing campaigns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignListParams {
    #[serde(default)]
    pub active_only: bool,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
