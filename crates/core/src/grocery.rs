//! Grocery kit selection and checkout totals.
//!
//! Prices always come from the catalogue; clients only choose items and
//! quantities, so totals are recomputed server-side on every checkout.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Largest quantity allowed on a single line.
pub const MAX_LINE_QUANTITY: i32 = 1000;

/// Largest number of distinct lines in one kit.
pub const MAX_LINES: usize = 50;

/// A donor's choice of one catalogue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitSelection {
    pub item_id: DbId,
    pub quantity: i32,
}

/// Catalogue data needed to price a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub item_id: DbId,
    pub name: String,
    pub unit: String,
    pub unit_price: f64,
}

/// A priced line as stored on a grocery donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryLineItem {
    pub item_id: DbId,
    pub name: String,
    pub unit: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Checkout totals for a kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryTotals {
    pub items: Vec<GroceryLineItem>,
    pub subtotal: f64,
    pub platform_fee: f64,
    pub total: f64,
}

/// Validate the shape of a selection before it is priced.
pub fn validate_selection(selection: &[KitSelection]) -> Result<(), CoreError> {
    if selection.is_empty() {
        return Err(CoreError::Validation(
            "Select at least one grocery item".into(),
        ));
    }
    if selection.len() > MAX_LINES {
        return Err(CoreError::Validation(format!(
            "A kit may contain at most {MAX_LINES} distinct items"
        )));
    }

    let mut seen = HashSet::new();
    for line in selection {
        if !seen.insert(line.item_id) {
            return Err(CoreError::Validation(format!(
                "Item {} is selected more than once",
                line.item_id
            )));
        }
        if line.quantity < 1 || line.quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::Validation(format!(
                "Quantity for item {} must be between 1 and {MAX_LINE_QUANTITY}, got {}",
                line.item_id, line.quantity
            )));
        }
    }
    Ok(())
}

/// Validate a platform fee percentage.
pub fn validate_fee_percent(fee_percent: f64) -> Result<(), CoreError> {
    if !fee_percent.is_finite() || !(0.0..=100.0).contains(&fee_percent) {
        return Err(CoreError::Validation(format!(
            "Platform fee must be between 0 and 100 percent, got {fee_percent}"
        )));
    }
    Ok(())
}

/// Price a validated selection against catalogue entries.
///
/// `catalogue` must contain every selected item; a missing item is reported
/// as a validation error (it was deleted or deactivated). Lines keep the
/// selection order.
pub fn compute_totals(
    selection: &[KitSelection],
    catalogue: &[PricedItem],
    fee_percent: f64,
) -> Result<GroceryTotals, CoreError> {
    validate_selection(selection)?;
    validate_fee_percent(fee_percent)?;

    let mut items = Vec::with_capacity(selection.len());
    for line in selection {
        let priced = catalogue
            .iter()
            .find(|p| p.item_id == line.item_id)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Grocery item {} is not available",
                    line.item_id
                ))
            })?;
        items.push(GroceryLineItem {
            item_id: priced.item_id,
            name: priced.name.clone(),
            unit: priced.unit.clone(),
            quantity: line.quantity,
            unit_price: priced.unit_price,
            line_total: round2(priced.unit_price * f64::from(line.quantity)),
        });
    }

    let subtotal = round2(items.iter().map(|i| i.line_total).sum());
    // Percent-to-paise: the /100 for percent and *100 for paise cancel out.
    let platform_fee = (subtotal * fee_percent).round() / 100.0;
    let total = round2(subtotal + platform_fee);

    Ok(GroceryTotals {
        items,
        subtotal,
        platform_fee,
        total,
    })
}

/// Round a rupee amount to paise.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
