use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::field::Field;

/// A user-defined data entity: a named, typed field list analogous to a
/// database table schema. By convention a model carries at most one
/// "primary key" field; this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: format!("model_{}", Uuid::new_v4()),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_type == "primary key")
    }
}
