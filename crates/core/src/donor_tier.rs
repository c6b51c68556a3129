//! Donor wall tiers.
//!
//! A tier is derived from the donated amount and never set by clients.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum amount (INR, inclusive) for each tier above Supporter.
pub const PLATINUM_THRESHOLD: f64 = 100_000.0;
pub const GOLD_THRESHOLD: f64 = 50_000.0;
pub const SILVER_THRESHOLD: f64 = 25_000.0;
pub const BRONZE_THRESHOLD: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
    Supporter,
}

/// Tiers in public display order, highest first.
pub const TIER_ORDER: [DonorTier; 5] = [
    DonorTier::Platinum,
    DonorTier::Gold,
    DonorTier::Silver,
    DonorTier::Bronze,
    DonorTier::Supporter,
];

const VALID_TIER_STRINGS: &[&str] = &["platinum", "gold", "silver", "bronze", "supporter"];

impl DonorTier {
    /// Assign a tier from a donated amount. Thresholds are inclusive.
    pub fn from_amount(amount: f64) -> Self {
        if amount >= PLATINUM_THRESHOLD {
            Self::Platinum
        } else if amount >= GOLD_THRESHOLD {
            Self::Gold
        } else if amount >= SILVER_THRESHOLD {
            Self::Silver
        } else if amount >= BRONZE_THRESHOLD {
            Self::Bronze
        } else {
            Self::Supporter
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platinum => "platinum",
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::Supporter => "supporter",
        }
    }

    /// Human-readable label shown on the wall.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
            Self::Supporter => "Supporter",
        }
    }

    /// Parse a tier from its stored string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "platinum" => Ok(Self::Platinum),
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "bronze" => Ok(Self::Bronze),
            "supporter" => Ok(Self::Supporter),
            _ => Err(CoreError::Validation(format!(
                "Invalid donor tier '{s}'. Must be one of: {}",
                VALID_TIER_STRINGS.join(", ")
            ))),
        }
    }
}
