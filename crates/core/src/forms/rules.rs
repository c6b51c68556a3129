//! Form field, validation rule, and conditional rule types.
//!
//! These serialize with camelCase keys because the admin form builder
//! stores and renders them directly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Submitted values keyed by field name.
pub type FormValues = serde_json::Map<String, Value>;

/// Validation failures keyed by field name.
///
/// The form engine fills it in field declaration order. Maps built from
/// `validator` errors on request DTOs are sorted by field name instead,
/// since `validator` does not keep struct order.
pub type FieldErrors = IndexMap<String, String>;

/// The fixed set of input types a form field can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    File,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Date => "date",
            Self::File => "file",
        }
    }

    /// Types whose value must come from the field's `options` list.
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

/// Per-field validation rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValidation {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Replaces the generated message for any violation of this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Shows or hides a field depending on another field's current value.
///
/// A trigger may be a scalar or an array; an array trigger matches when the
/// dependency value equals any of its elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub depends_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_when: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_when: Option<Value>,
}

/// One field of a dynamic form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub validation: FieldValidation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ConditionalRule>,
}

fn default_active() -> bool {
    true
}

impl FormField {
    /// Label used in generated messages, falling back to the field name.
    pub fn display_name(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            self.label.trim()
        }
    }
}
