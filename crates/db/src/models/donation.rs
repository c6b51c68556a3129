//! Donation entity model, DTOs and aggregate statistics.

use hkv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `donations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: DbId,
    pub campaign_id: Option<DbId>,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_phone: Option<String>,
    pub pan_number: Option<String>,
    pub address: Option<String>,
    pub seva_type: String,
    pub amount: f64,
    pub currency: String,
    pub payment_status: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub is_anonymous: bool,
    pub message: Option<String>,
    pub receipt_number: Option<String>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a donation. New donations always start `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDonation {
    pub campaign_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub donor_name: String,
    #[validate(email)]
    pub donor_email: String,
    #[validate(length(max = 20))]
    pub donor_phone: Option<String>,
    pub pan_number: Option<String>,
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub seva_type: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub gateway_order_id: Option<String>,
    pub is_anonymous: Option<bool>,
    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

/// DTO for editing donor details. Amount, campaign and status are fixed
/// after creation; status moves through [`UpdateDonationStatus`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDonation {
    #[validate(length(min = 1, max = 200))]
    pub donor_name: Option<String>,
    #[validate(email)]
    pub donor_email: Option<String>,
    #[validate(length(max = 20))]
    pub donor_phone: Option<String>,
    pub pan_number: Option<String>,
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub seva_type: Option<String>,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub is_anonymous: Option<bool>,
    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

/// Body of `PATCH /donations/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDonationStatus {
    pub status: String,
    pub gateway_payment_id: Option<String>,
}

/// Filters for listing donations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationListParams {
    pub status: Option<String>,
    pub campaign_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Aggregate donation figures for the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DonationStats {
    pub total_count: i64,
    pub pending_count: i64,
    pub completed_count: i64,
    pub failed_count: i64,
    pub refunded_count: i64,
    /// Sum of completed donations.
    pub total_amount: f64,
    /// Mean of completed donations, 0 when there are none.
    pub average_amount: f64,
    pub unique_donors: i64,
}
