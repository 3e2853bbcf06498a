use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::edge::Edge;
use super::enums::HttpMethod;
use super::node::Node;

/// The persisted node/edge graph attached to one route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// A generated backend route. `flow_data` holds the route's behavior graph
/// and is absent until the graph is first saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_data: Option<FlowData>,
}

impl Route {
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            id: format!("route_{}", Uuid::new_v4()),
            name: name.into(),
            method,
            url: url.into(),
            flow_data: None,
        }
    }
}
