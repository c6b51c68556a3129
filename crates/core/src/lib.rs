//! Domain logic for the Hare Krishna Vidya backend.
//!
//! Everything here is pure: no database or HTTP access, so the rules can be
//! shared by the repository layer, the API handlers and their tests.

pub mod campaign;
pub mod careers;
pub mod donor_tier;
pub mod error;
pub mod forms;
pub mod gallery;
pub mod grocery;
pub mod pagination;
pub mod payment;
pub mod receipt;
pub mod types;
pub mod uploads;
