//! Dynamic form engine.
//!
//! A form is an ordered list of [`FormField`] definitions. Given the current
//! values, the engine decides which fields are visible (conditional rules
//! reference other fields by name) and validates only the visible, active
//! ones, reporting the first violated rule per field.

pub mod definition;
pub mod evaluator;
pub mod rules;
pub mod visibility;

pub use definition::validate_definition;
pub use evaluator::{validate_field, validate_submission};
pub use rules::{
    ConditionalRule, FieldErrors, FieldType, FieldValidation, FormField, FormValues,
};
pub use visibility::{prune_to_visible, visible_field_names, visible_fields};
