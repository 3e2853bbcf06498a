//! Translation service projecting models into their external schema shape.

use serde_json::{Map, Value, json};

use crate::models::{Field, Model};

/// Pure translation from the internal model representation to the
/// external-facing schema document.
pub struct TranslationService;

impl TranslationService {
    /// Translate a model into its external schema representation.
    pub fn translate_model(model: &Model) -> Value {
        let fields: Vec<Value> = model
            .fields
            .iter()
            .map(|field| {
                let mut entry = Map::new();
                entry.insert("name".to_string(), json!(field.name));
                entry.insert(
                    "type".to_string(),
                    json!(Self::translate_field_type(&field.field_type)),
                );
                entry.insert(
                    "isPrimaryKey".to_string(),
                    json!(field.field_type == "primary key"),
                );
                entry.insert("validation".to_string(), Self::translate_validation(field));
                entry.insert(
                    "defaultValue".to_string(),
                    if field.default_value.is_empty() {
                        Value::Null
                    } else {
                        json!(field.default_value)
                    },
                );
                if let Some(mapping) = field.mapping.as_deref().filter(|m| !m.is_empty()) {
                    entry.insert("mapping".to_string(), Value::Object(Self::parse_mapping(mapping)));
                }
                Value::Object(entry)
            })
            .collect();

        json!({
            "name": model.name,
            "fields": fields,
        })
    }

    /// Map an internal field type name to its external type token. Unknown
    /// types pass through upper-cased.
    pub fn translate_field_type(field_type: &str) -> String {
        match field_type {
            "primary key" => "INTEGER",
            "string" => "STRING",
            "long text" => "TEXT",
            "integer" => "INTEGER",
            "double" => "DOUBLE",
            "big number" => "BIGINT",
            "boolean" => "BOOLEAN",
            "date" => "DATE",
            "datetime" => "DATETIME",
            "uuid" => "UUID",
            "json" => "JSON",
            "mapping" => "MAPPING",
            other => return other.to_uppercase(),
        }
        .to_string()
    }

    /// Validation descriptor: `{type: rule, ...options}` or null when no rule
    /// is set.
    fn translate_validation(field: &Field) -> Value {
        if field.validation.is_empty() {
            return Value::Null;
        }

        let mut validation = Map::new();
        validation.insert("type".to_string(), json!(field.validation));
        if let Some(options) = &field.validation_options
            && let Ok(Value::Object(option_map)) = serde_json::to_value(options)
        {
            validation.extend(option_map);
        }
        Value::Object(validation)
    }

    /// Parse a "k1:v1,k2:v2" mapping string into a key/value record.
    /// Malformed input degrades to an empty record rather than raising.
    pub fn parse_mapping(mapping: &str) -> Map<String, Value> {
        let mut entries = Map::new();
        for pair in mapping.split(',') {
            let Some((key, value)) = pair.split_once(':') else {
                return Map::new();
            };
            entries.insert(key.trim().to_string(), json!(value.trim()));
        }
        entries
    }
}
