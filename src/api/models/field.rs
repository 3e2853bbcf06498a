use serde::{Deserialize, Serialize};

/// Options attached to a validation rule. Only the keys relevant to the
/// selected rule are ever populated; absent keys are omitted from the wire
/// representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
}

/// A single typed field of a model, or a name/type pair on a url or output
/// node. Field types are open strings ("primary key", "string", "long text",
/// "integer", ...) so unknown types survive round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub validation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_options: Option<ValidationOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            default_value: String::new(),
            validation: String::new(),
            validation_options: None,
            mapping: None,
        }
    }
}

/// Append a field to a field array. Fields with an empty (or whitespace-only)
/// name are rejected and the array is left unchanged.
pub fn add_field(fields: &mut Vec<Field>, field: Field) -> bool {
    if field.name.trim().is_empty() {
        return false;
    }
    fields.push(field);
    true
}

/// Remove the field at `index`. Out-of-range indices are a no-op.
pub fn remove_field(fields: &mut Vec<Field>, index: usize) {
    if index < fields.len() {
        fields.remove(index);
    }
}

/// Permissive numeric parse used for min/max/minLength/maxLength option
/// values typed into the panel. Bad input degrades to an absent value rather
/// than an error.
pub fn parse_option_number(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
