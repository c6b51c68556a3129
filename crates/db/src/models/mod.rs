//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod campaign;
pub mod careers;
pub mod dashboard;
pub mod donation;
pub mod donor_wall;
pub mod form;
pub mod gallery;
pub mod grocery;
