//! Payment status lifecycle shared by cash donations and grocery kits.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Prefix for donation receipt numbers.
pub const RECEIPT_PREFIX: &str = "HKV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// All valid payment status strings.
pub const VALID_PAYMENT_STATUSES: &[&str] = &["pending", "completed", "failed", "refunded"];

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    /// Parse a status from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(CoreError::Validation(format!(
                "Invalid payment status '{s}'. Must be one of: {}",
                VALID_PAYMENT_STATUSES.join(", ")
            ))),
        }
    }

    /// Whether moving from `self` to `next` is allowed.
    ///
    /// Re-applying the current status is always allowed (gateway callbacks
    /// are retried).
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        use PaymentStatus::*;
        *self == next
            || matches!(
                (self, next),
                (Pending, Completed) | (Pending, Failed) | (Failed, Pending) | (Completed, Refunded)
            )
    }
}

/// Check a status transition, returning a conflict error when disallowed.
pub fn ensure_transition(current: PaymentStatus, next: PaymentStatus) -> Result<(), CoreError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Cannot change payment status from {} to {}",
            current.as_str(),
            next.as_str()
        )))
    }
}

/// Format a receipt number: `HKV-{year}-{id:06}`.
pub fn receipt_number(year: i32, donation_id: DbId) -> String {
    format!("{RECEIPT_PREFIX}-{year}-{donation_id:06}")
}

/// Validate an Indian PAN (`AAAAA9999A`).
pub fn validate_pan(pan: &str) -> Result<(), CoreError> {
    let bytes = pan.as_bytes();
    let valid = bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase();
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid PAN '{pan}'. Expected format AAAAA9999A"
        )))
    }
}
