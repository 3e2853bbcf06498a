//! In-memory project store.
//!
//! Single source of truth for the currently edited flow graph, the
//! model/role/route registries, the selected node, and the global settings.
//! Every consumer observes the same state through one store.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::{Edge, FlowData, Model, Node, Role, Route, Settings};

/// Owned state container for one project editing session.
///
/// All mutations are synchronous state transitions. Updates and deletes
/// addressing an unknown id are silent no-ops: the editing UI must stay
/// non-blocking, so absence is not an error here. HTTP handlers that need to
/// report absence inspect the returned `bool`.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selected_node: Option<String>,
    models: Vec<Model>,
    roles: Vec<Role>,
    routes: Vec<Route>,
    settings: Settings,
}

impl ProjectStore {
    /// Create a store with generated default settings. The caller injects the
    /// current time so defaults stay deterministic under test.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            selected_node: None,
            models: Vec::new(),
            roles: Vec::new(),
            routes: Vec::new(),
            settings: Settings::generated(now),
        }
    }

    // --- flow graph ---

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn flow_data(&self) -> FlowData {
        FlowData {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Replace the full node collection.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
        self.clear_stale_selection();
    }

    /// Replace the node collection with a function of the previous one.
    /// Supports speculative updates coming from canvas change-events.
    pub fn update_nodes<F>(&mut self, f: F)
    where
        F: FnOnce(&[Node]) -> Vec<Node>,
    {
        self.nodes = f(&self.nodes);
        self.clear_stale_selection();
    }

    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    pub fn update_edges<F>(&mut self, f: F)
    where
        F: FnOnce(&[Edge]) -> Vec<Edge>,
    {
        self.edges = f(&self.edges);
    }

    pub fn get_node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove a node and cascade-delete its incident edges, so the graph
    /// never holds a dangling edge after an explicit removal.
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != node_id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| !e.connects(node_id));
        if self.selected_node.as_deref() == Some(node_id) {
            self.selected_node = None;
        }
        true
    }

    /// Merge `patch` into the target node's data by key. Unknown node ids
    /// and patches that do not fit the node's type leave every node
    /// untouched.
    pub fn update_node_data(&mut self, node_id: &str, patch: &Map<String, Value>) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) else {
            return false;
        };
        if let Err(e) = node.config.apply_patch(patch) {
            warn!("Discarding bad data patch for node {}: {}", node_id, e);
            return false;
        }
        true
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        self.edges.len() != before
    }

    // --- selection ---

    /// Select the node whose configuration panel is visible; `None` closes
    /// the panel. Selecting an unknown id is a no-op.
    pub fn set_selected_node(&mut self, node_id: Option<String>) -> bool {
        match node_id {
            None => {
                self.selected_node = None;
                true
            }
            Some(id) if self.get_node(&id).is_some() => {
                self.selected_node = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected_node
            .as_deref()
            .and_then(|id| self.get_node(id))
    }

    fn clear_stale_selection(&mut self) {
        if let Some(id) = self.selected_node.as_deref()
            && self.get_node(id).is_none()
        {
            self.selected_node = None;
        }
    }

    // --- model registry ---

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn get_model(&self, model_id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.id == model_id)
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn update_model(&mut self, model: Model) -> bool {
        match self.models.iter_mut().find(|m| m.id == model.id) {
            Some(existing) => {
                *existing = model;
                true
            }
            None => false,
        }
    }

    // --- roles ---

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn get_role(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    pub fn add_role(&mut self, role: Role) {
        self.roles.push(role);
    }

    pub fn update_role(&mut self, role: Role) -> bool {
        match self.roles.iter_mut().find(|r| r.id == role.id) {
            Some(existing) => {
                *existing = role;
                true
            }
            None => false,
        }
    }

    pub fn delete_role(&mut self, role_id: &str) {
        self.roles.retain(|r| r.id != role_id);
    }

    // --- routes ---

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get_route(&self, route_id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == route_id)
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn update_route(&mut self, route: Route) -> bool {
        match self.routes.iter_mut().find(|r| r.id == route.id) {
            Some(existing) => {
                *existing = route;
                true
            }
            None => false,
        }
    }

    pub fn delete_route(&mut self, route_id: &str) {
        self.routes.retain(|r| r.id != route_id);
    }

    /// Persist a flow graph onto a route. Returns false for unknown routes.
    pub fn set_route_flow(&mut self, route_id: &str, flow_data: FlowData) -> bool {
        match self.routes.iter_mut().find(|r| r.id == route_id) {
            Some(route) => {
                route.flow_data = Some(flow_data);
                true
            }
            None => false,
        }
    }

    // --- settings ---

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Full replace of the settings record.
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}
