//! Conditional visibility resolution.

use std::collections::HashMap;

use serde_json::Value;

use super::rules::{ConditionalRule, FormField, FormValues};

/// Return the visible fields in declaration order.
///
/// A field is visible when it is active and its conditional rule (if any)
/// allows it given the dependency's current value. A dependency that is
/// itself hidden, inactive or undeclared counts as empty.
pub fn visible_fields<'a>(fields: &'a [FormField], values: &FormValues) -> Vec<&'a FormField> {
    let visibility = resolve_all(fields, values);
    fields
        .iter()
        .zip(visibility)
        .filter_map(|(field, visible)| visible.then_some(field))
        .collect()
}

/// Names of the visible fields, in declaration order.
pub fn visible_field_names(fields: &[FormField], values: &FormValues) -> Vec<String> {
    visible_fields(fields, values)
        .into_iter()
        .map(|f| f.name.clone())
        .collect()
}

/// Keep only the submitted values that belong to visible fields.
pub fn prune_to_visible(fields: &[FormField], values: &FormValues) -> FormValues {
    visible_fields(fields, values)
        .into_iter()
        .filter_map(|f| values.get(&f.name).map(|v| (f.name.clone(), v.clone())))
        .collect()
}

fn resolve_all(fields: &[FormField], values: &FormValues) -> Vec<bool> {
    let index: HashMap<&str, usize> = fields
        .iter()
        .enumerate()
        .map(|(i, f)| (f.name.as_str(), i))
        .collect();
    let mut memo = vec![None; fields.len()];
    for i in 0..fields.len() {
        resolve(i, fields, &index, values, &mut memo, 0);
    }
    memo.into_iter().map(|v| v.unwrap_or(false)).collect()
}

fn resolve(
    i: usize,
    fields: &[FormField],
    index: &HashMap<&str, usize>,
    values: &FormValues,
    memo: &mut [Option<bool>],
    depth: usize,
) -> bool {
    if let Some(visible) = memo[i] {
        return visible;
    }
    // Saved definitions are acyclic; a dry-run definition may not be.
    if depth > fields.len() {
        return false;
    }

    let field = &fields[i];
    let visible = field.is_active
        && match &field.conditional {
            None => true,
            Some(rule) => {
                let dependency = match index.get(rule.depends_on.as_str()) {
                    Some(&j) if resolve(j, fields, index, values, memo, depth + 1) => {
                        values.get(&rule.depends_on)
                    }
                    _ => None,
                };
                rule_allows(rule, dependency)
            }
        };

    memo[i] = Some(visible);
    visible
}

fn rule_allows(rule: &ConditionalRule, dependency: Option<&Value>) -> bool {
    let shown = rule
        .show_when
        .as_ref()
        .map_or(true, |trigger| value_matches(dependency, trigger));
    let not_hidden = rule
        .hide_when
        .as_ref()
        .map_or(true, |trigger| !value_matches(dependency, trigger));
    shown && not_hidden
}

/// Whether a dependency value matches a trigger.
///
/// Arrays on the value side match when any element matches (multi-select
/// checkboxes); arrays on the trigger side are an any-of list. Scalars are
/// compared by their string form. A missing or null value is an unticked
/// checkbox, so it matches both an empty trigger and `false`.
pub(crate) fn value_matches(value: Option<&Value>, trigger: &Value) -> bool {
    if let Value::Array(alternatives) = trigger {
        return alternatives.iter().any(|t| value_matches(value, t));
    }
    let trigger = scalar_text(trigger);
    match value {
        Some(Value::Array(items)) => items.iter().any(|item| scalar_text(item) == trigger),
        None | Some(Value::Null) => trigger.is_empty() || trigger == "false",
        Some(v) => scalar_text(v) == trigger,
    }
}

/// String form of a JSON scalar used for comparisons.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
