//! Structural checks for a form definition before it is saved.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use super::rules::FormField;
use crate::error::CoreError;

/// Maximum number of fields a single form may declare.
pub const MAX_FIELDS: usize = 100;

/// Validate a form definition.
///
/// Rejects empty or duplicate field names, select/radio fields without
/// options, patterns that do not compile, inverted length or numeric bounds,
/// conditional rules that reference unknown fields or the field itself, and
/// dependency cycles.
pub fn validate_definition(fields: &[FormField]) -> Result<(), CoreError> {
    if fields.len() > MAX_FIELDS {
        return Err(CoreError::Validation(format!(
            "A form may declare at most {MAX_FIELDS} fields, got {}",
            fields.len()
        )));
    }

    let mut seen = HashSet::new();
    for field in fields {
        validate_field_name(&field.name)?;
        if !seen.insert(field.name.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate field name '{}'",
                field.name
            )));
        }
    }

    for field in fields {
        validate_field_rules(field)?;
        if let Some(rule) = &field.conditional {
            if rule.depends_on == field.name {
                return Err(CoreError::Validation(format!(
                    "Field '{}' cannot depend on itself",
                    field.name
                )));
            }
            if !seen.contains(rule.depends_on.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Field '{}' depends on unknown field '{}'",
                    field.name, rule.depends_on
                )));
            }
        }
    }

    detect_cycles(fields)
}

/// Field names are identifiers: letters, digits, `_` and `-`, not starting
/// with a digit or hyphen.
fn validate_field_name(name: &str) -> Result<(), CoreError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid field name '{name}'. Use letters, digits, '_' or '-', starting with a letter or '_'"
        )))
    }
}

fn validate_field_rules(field: &FormField) -> Result<(), CoreError> {
    let rules = &field.validation;

    if field.field_type.requires_options() && field.options.is_empty() {
        return Err(CoreError::Validation(format!(
            "Field '{}' of type {} needs at least one option",
            field.name,
            field.field_type.as_str()
        )));
    }

    if let Some(pattern) = &rules.pattern {
        Regex::new(pattern).map_err(|e| {
            CoreError::Validation(format!(
                "Field '{}' has an invalid pattern: {e}",
                field.name
            ))
        })?;
    }

    if let (Some(min), Some(max)) = (rules.min_length, rules.max_length) {
        if min > max {
            return Err(CoreError::Validation(format!(
                "Field '{}' has minLength {min} greater than maxLength {max}",
                field.name
            )));
        }
    }

    if let (Some(min), Some(max)) = (rules.min, rules.max) {
        if min > max {
            return Err(CoreError::Validation(format!(
                "Field '{}' has min {min} greater than max {max}",
                field.name
            )));
        }
    }

    Ok(())
}

/// Each field has at most one dependency, so following the chain from every
/// field either terminates or revisits a field.
fn detect_cycles(fields: &[FormField]) -> Result<(), CoreError> {
    let edges: HashMap<&str, &str> = fields
        .iter()
        .filter_map(|f| {
            f.conditional
                .as_ref()
                .map(|rule| (f.name.as_str(), rule.depends_on.as_str()))
        })
        .collect();

    for field in fields {
        let mut visited = HashSet::new();
        let mut current = field.name.as_str();
        while let Some(&next) = edges.get(current) {
            if !visited.insert(current) {
                return Err(CoreError::Validation(format!(
                    "Conditional rules form a cycle involving '{}'",
                    field.name
                )));
            }
            current = next;
        }
    }
    Ok(())
}
