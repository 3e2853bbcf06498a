use serde::{Deserialize, Serialize};

/// HTTP method carried by url nodes and route definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::Get
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    Bearer,
    Basic,
    Jwt,
}

impl Default for AuthScheme {
    fn default() -> Self {
        AuthScheme::Bearer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Definition,
    Mockup,
}

impl Default for OutputKind {
    fn default() -> Self {
        OutputKind::Definition
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DbOperation {
    FindMany,
    FindOne,
    FindFirst,
}

impl Default for DbOperation {
    fn default() -> Self {
        DbOperation::FindMany
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl Default for VariableType {
    fn default() -> Self {
        VariableType::String
    }
}

/// Node type discriminant. The canvas frontend carries the serialized token
/// as the drag-and-drop payload, so the kebab-case form doubles as the drop
/// token read back on the drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Auth,
    Url,
    Output,
    Logic,
    Variable,
    DbFind,
    DbInsert,
    DbUpdate,
    DbDelete,
    DbQuery,
}

impl NodeKind {
    /// Parse a drag-and-drop payload token into a node kind.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "auth" => Some(NodeKind::Auth),
            "url" => Some(NodeKind::Url),
            "output" => Some(NodeKind::Output),
            "logic" => Some(NodeKind::Logic),
            "variable" => Some(NodeKind::Variable),
            "db-find" => Some(NodeKind::DbFind),
            "db-insert" => Some(NodeKind::DbInsert),
            "db-update" => Some(NodeKind::DbUpdate),
            "db-delete" => Some(NodeKind::DbDelete),
            "db-query" => Some(NodeKind::DbQuery),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            NodeKind::Auth => "auth",
            NodeKind::Url => "url",
            NodeKind::Output => "output",
            NodeKind::Logic => "logic",
            NodeKind::Variable => "variable",
            NodeKind::DbFind => "db-find",
            NodeKind::DbInsert => "db-insert",
            NodeKind::DbUpdate => "db-update",
            NodeKind::DbDelete => "db-delete",
            NodeKind::DbQuery => "db-query",
        }
    }
}
