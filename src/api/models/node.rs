use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::enums::{AuthScheme, DbOperation, HttpMethod, NodeKind, OutputKind, VariableType};
use super::field::Field;

static PATH_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":[a-zA-Z]+").expect("path parameter regex is valid")
});

/// Canvas position of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub auth_type: AuthScheme,
    #[serde(default)]
    pub token_var: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            label: "Auth".to_string(),
            auth_type: AuthScheme::Bearer,
            token_var: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub path: String,
    /// Request body fields.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Derived from `:param` tokens in the path; replaced wholesale whenever
    /// the path changes.
    #[serde(default)]
    pub query_fields: Vec<Field>,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            label: "URL".to_string(),
            method: HttpMethod::Get,
            path: String::new(),
            fields: Vec::new(),
            query_fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub output_type: OutputKind,
    /// Response shape when the output type is `definition`.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Raw response body when the output type is `mockup`.
    #[serde(default)]
    pub response_raw: String,
    #[serde(default = "default_status_code")]
    pub status_code: u16,
}

fn default_status_code() -> u16 {
    200
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label: "Output".to_string(),
            output_type: OutputKind::Definition,
            fields: Vec::new(),
            response_raw: String::new(),
            status_code: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicConfig {
    #[serde(default)]
    pub label: String,
    /// Free-form script text, opaque to the rest of the system.
    #[serde(default)]
    pub code: String,
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            label: "Logic".to_string(),
            code: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub var_type: VariableType,
    #[serde(default)]
    pub default_value: String,
}

impl Default for VariableConfig {
    fn default() -> Self {
        Self {
            label: "Variable".to_string(),
            name: String::new(),
            var_type: VariableType::String,
            default_value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbReadConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub operation: DbOperation,
    /// SQL template with `:param` placeholders, opaque free text.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub result_var: String,
}

impl Default for DbReadConfig {
    fn default() -> Self {
        Self {
            label: "Database Find".to_string(),
            model: String::new(),
            operation: DbOperation::FindMany,
            query: String::new(),
            result_var: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbInsertConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub operation: DbOperation,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub result_var: String,
    /// Newline-delimited "name: type" pairs, unparsed free text.
    #[serde(default)]
    pub variables: String,
}

impl Default for DbInsertConfig {
    fn default() -> Self {
        Self {
            label: "Database Insert".to_string(),
            model: String::new(),
            operation: DbOperation::FindMany,
            query: String::new(),
            result_var: String::new(),
            variables: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUpdateConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub operation: DbOperation,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub result_var: String,
    #[serde(default)]
    pub variables: String,
    #[serde(default)]
    pub id_field: String,
}

impl Default for DbUpdateConfig {
    fn default() -> Self {
        Self {
            label: "Database Update".to_string(),
            model: String::new(),
            operation: DbOperation::FindMany,
            query: String::new(),
            result_var: String::new(),
            variables: String::new(),
            id_field: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbDeleteConfig {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub operation: DbOperation,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub result_var: String,
    #[serde(default)]
    pub id_field: String,
}

impl Default for DbDeleteConfig {
    fn default() -> Self {
        Self {
            label: "Database Delete".to_string(),
            model: String::new(),
            operation: DbOperation::FindMany,
            query: String::new(),
            result_var: String::new(),
            id_field: String::new(),
        }
    }
}

/// Typed configuration of a node, one variant per node kind. The wire shape
/// keeps the discriminant in `type` and the variant payload under `data`,
/// matching what the canvas frontend exchanges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum NodeConfig {
    Auth(AuthConfig),
    Url(UrlConfig),
    Output(OutputConfig),
    Logic(LogicConfig),
    Variable(VariableConfig),
    DbFind(DbReadConfig),
    DbInsert(DbInsertConfig),
    DbUpdate(DbUpdateConfig),
    DbDelete(DbDeleteConfig),
    DbQuery(DbReadConfig),
}

impl NodeConfig {
    /// Default configuration for a freshly dropped node of the given kind.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Auth => NodeConfig::Auth(AuthConfig::default()),
            NodeKind::Url => NodeConfig::Url(UrlConfig::default()),
            NodeKind::Output => NodeConfig::Output(OutputConfig::default()),
            NodeKind::Logic => NodeConfig::Logic(LogicConfig::default()),
            NodeKind::Variable => NodeConfig::Variable(VariableConfig::default()),
            NodeKind::DbFind => NodeConfig::DbFind(DbReadConfig::default()),
            NodeKind::DbInsert => NodeConfig::DbInsert(DbInsertConfig::default()),
            NodeKind::DbUpdate => NodeConfig::DbUpdate(DbUpdateConfig::default()),
            NodeKind::DbDelete => NodeConfig::DbDelete(DbDeleteConfig::default()),
            NodeKind::DbQuery => NodeConfig::DbQuery(DbReadConfig {
                label: "Database Query".to_string(),
                ..DbReadConfig::default()
            }),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Auth(_) => NodeKind::Auth,
            NodeConfig::Url(_) => NodeKind::Url,
            NodeConfig::Output(_) => NodeKind::Output,
            NodeConfig::Logic(_) => NodeKind::Logic,
            NodeConfig::Variable(_) => NodeKind::Variable,
            NodeConfig::DbFind(_) => NodeKind::DbFind,
            NodeConfig::DbInsert(_) => NodeKind::DbInsert,
            NodeConfig::DbUpdate(_) => NodeKind::DbUpdate,
            NodeConfig::DbDelete(_) => NodeKind::DbDelete,
            NodeConfig::DbQuery(_) => NodeKind::DbQuery,
        }
    }

    /// Shallow-merge `patch` into the configuration data by key. Keys the
    /// variant does not know are ignored; keys absent from the patch keep
    /// their current value. A patch that fails to deserialize back into the
    /// variant leaves the configuration unchanged.
    ///
    /// Patching a url node's `path` re-derives `queryFields` from the new
    /// path, replacing the whole array.
    pub fn apply_patch(&mut self, patch: &Map<String, Value>) -> Result<(), serde_json::Error> {
        let mut tagged = serde_json::to_value(&*self)?;
        if let Some(data) = tagged.get_mut("data").and_then(Value::as_object_mut) {
            for (key, value) in patch {
                data.insert(key.clone(), value.clone());
            }
        }
        let merged: NodeConfig = serde_json::from_value(tagged)?;
        *self = merged;

        if patch.contains_key("path")
            && let NodeConfig::Url(cfg) = self
        {
            cfg.query_fields = extract_path_params(&cfg.path);
        }
        Ok(())
    }
}

/// Extract `:param` tokens from a url path as string-typed query fields.
/// A path without tokens yields an empty array.
pub fn extract_path_params(path: &str) -> Vec<Field> {
    PATH_PARAM_RE
        .find_iter(path)
        .map(|m| Field::new(&m.as_str()[1..], "string"))
        .collect()
}

/// One configurable unit in a route's behavior graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Position,
    #[serde(flatten)]
    pub config: NodeConfig,
}

impl Node {
    /// Create a node of the given kind with its default configuration, as on
    /// a canvas drop.
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            id: format!("{}_{}", kind.token(), Uuid::new_v4()),
            position,
            config: NodeConfig::default_for(kind),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.config.kind()
    }
}
