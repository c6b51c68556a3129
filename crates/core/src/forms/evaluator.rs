//! Submission validator: pure logic, no database access.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use validator::ValidateEmail;

use super::rules::{FieldErrors, FieldType, FormField, FormValues};
use super::visibility::visible_fields;

/// Validate submitted values against the visible fields of a form.
///
/// Hidden and inactive fields are skipped entirely. Each failing field
/// contributes one message: the first rule it violates.
pub fn validate_submission(fields: &[FormField], values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in visible_fields(fields, values) {
        if let Some(message) = validate_field(field, values.get(&field.name)) {
            errors.insert(field.name.clone(), message);
        }
    }
    errors
}

/// Validate a single value, returning the first violation message.
///
/// Check order: required, type format, minLength, maxLength, pattern, min,
/// max. Empty values on optional fields pass without further checks.
pub fn validate_field(field: &FormField, value: Option<&Value>) -> Option<String> {
    let rules = &field.validation;
    let label = field.display_name();

    let value = match value {
        Some(v) if !is_empty(v) => v,
        _ => {
            return rules
                .required
                .then(|| override_or(field, format!("{label} is required")));
        }
    };

    check_format(field, value)
        .or_else(|| check_length(field, value))
        .or_else(|| check_pattern(field, value))
        .or_else(|| check_range(field, value))
        .map(|generated| override_or(field, generated))
}

fn override_or(field: &FormField, generated: String) -> String {
    field.validation.message.clone().unwrap_or(generated)
}

/// Empty means missing for validation purposes.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Bool(b) => !b,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.trim())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn check_format(field: &FormField, value: &Value) -> Option<String> {
    let label = field.display_name();
    match field.field_type {
        FieldType::Text | FieldType::Textarea => {
            as_text(value).is_none().then(|| format!("{label} must be text"))
        }
        FieldType::Email => match as_text(value) {
            Some(text) if text.to_string().validate_email() => None,
            _ => Some(format!("{label} must be a valid email address")),
        },
        FieldType::Number => as_number(value)
            .is_none()
            .then(|| format!("{label} must be a number")),
        FieldType::Date => match as_text(value) {
            Some(text) if NaiveDate::parse_from_str(&text, "%Y-%m-%d").is_ok() => None,
            _ => Some(format!("{label} must be a date (YYYY-MM-DD)")),
        },
        FieldType::Select | FieldType::Radio => match as_text(value) {
            Some(text) if in_options(field, &text) => None,
            _ => Some(options_message(field)),
        },
        FieldType::Checkbox => {
            if field.options.is_empty() {
                return None;
            }
            let all_allowed = match value {
                Value::Array(items) => items
                    .iter()
                    .all(|item| as_text(item).is_some_and(|t| in_options(field, &t))),
                Value::Bool(_) => true,
                other => as_text(other).is_some_and(|t| in_options(field, &t)),
            };
            (!all_allowed).then(|| options_message(field))
        }
        FieldType::File => None,
    }
}

fn in_options(field: &FormField, text: &str) -> bool {
    field.options.is_empty() || field.options.iter().any(|o| o == text)
}

fn options_message(field: &FormField) -> String {
    format!(
        "{} must be one of: {}",
        field.display_name(),
        field.options.join(", ")
    )
}

fn check_length(field: &FormField, value: &Value) -> Option<String> {
    let rules = &field.validation;
    if rules.min_length.is_none() && rules.max_length.is_none() {
        return None;
    }
    let label = field.display_name();

    let (len, unit) = match value {
        Value::Array(items) => (items.len(), "selections"),
        other => (as_text(other)?.chars().count(), "characters"),
    };

    if let Some(min) = rules.min_length {
        if len < min {
            return Some(format!("{label} must have at least {min} {unit}"));
        }
    }
    if let Some(max) = rules.max_length {
        if len > max {
            return Some(format!("{label} must have at most {max} {unit}"));
        }
    }
    None
}

/// Upper bound on cached patterns; the cache is cleared when it fills up.
const PATTERN_CACHE_CAPACITY: usize = 256;

/// Compiled field patterns keyed by source text, shared across submissions.
static PATTERN_CACHE: LazyLock<RwLock<HashMap<String, Regex>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Compile `pattern` once and reuse it. `None` when it does not compile.
fn compiled_pattern(pattern: &str) -> Option<Regex> {
    if let Some(re) = PATTERN_CACHE
        .read()
        .ok()
        .and_then(|cache| cache.get(pattern).cloned())
    {
        return Some(re);
    }

    let re = Regex::new(pattern).ok()?;
    if let Ok(mut cache) = PATTERN_CACHE.write() {
        if cache.len() >= PATTERN_CACHE_CAPACITY {
            cache.clear();
        }
        cache.insert(pattern.to_string(), re.clone());
    }
    Some(re)
}

fn check_pattern(field: &FormField, value: &Value) -> Option<String> {
    let pattern = field.validation.pattern.as_deref()?;
    let text = as_text(value)?;
    // Definitions are checked on save; an uncompilable pattern in a dry run
    // is ignored.
    let re = compiled_pattern(pattern)?;
    (!re.is_match(&text)).then(|| format!("{} is not in the expected format", field.display_name()))
}

fn check_range(field: &FormField, value: &Value) -> Option<String> {
    let rules = &field.validation;
    if field.field_type != FieldType::Number {
        return None;
    }
    let number = as_number(value)?;
    let label = field.display_name();

    if let Some(min) = rules.min {
        if number < min {
            return Some(format!("{label} must be at least {}", format_number(min)));
        }
    }
    if let Some(max) = rules.max {
        if number > max {
            return Some(format!("{label} must be at most {}", format_number(max)));
        }
    }
    None
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
