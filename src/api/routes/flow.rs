//! Flow graph routes: nodes, edges, selection and validation for the
//! currently edited route behavior graph.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::graph;
use crate::models::{Edge, Node, NodeKind, Position};

use super::app_state::AppState;
use super::error::ApiError;

/// Request body for creating a node from a canvas drop. `type` carries the
/// drag-and-drop payload token.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateNodeRequest {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
}

/// Request body for a connect gesture.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateEdgeRequest {
    pub source: String,
    pub target: String,
}

/// Request body for changing the selected node. A null (or absent) id closes
/// the configuration panel.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    #[serde(default)]
    pub node_id: Option<String>,
}

/// Create the flow router
pub fn flow_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_flow))
        .route("/nodes", put(replace_nodes).post(create_node))
        .route("/nodes/{node_id}", axum::routing::delete(delete_node))
        .route("/nodes/{node_id}/data", axum::routing::patch(patch_node_data))
        .route("/edges", put(replace_edges).post(create_edge))
        .route("/edges/{edge_id}", axum::routing::delete(delete_edge))
        .route("/selection", get(get_selection).put(set_selection))
        .route("/validate", get(validate_flow))
}

/// GET /flow - current node and edge collections
#[utoipa::path(
    get,
    path = "/flow",
    tag = "Flow",
    responses((status = 200, description = "Current flow graph"))
)]
pub async fn get_flow(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().await;
    Json(json!({
        "nodes": store.nodes(),
        "edges": store.edges(),
    }))
}

/// PUT /flow/nodes - replace the full node collection
#[utoipa::path(
    put,
    path = "/flow/nodes",
    tag = "Flow",
    responses((status = 200, description = "Node collection replaced"))
)]
pub async fn replace_nodes(
    State(state): State<AppState>,
    Json(nodes): Json<Vec<Node>>,
) -> Json<Value> {
    let mut store = state.store.lock().await;
    store.set_nodes(nodes);
    Json(json!({ "nodes": store.nodes() }))
}

/// POST /flow/nodes - instantiate a node from a drop token
#[utoipa::path(
    post,
    path = "/flow/nodes",
    tag = "Flow",
    request_body = CreateNodeRequest,
    responses(
        (status = 201, description = "Node created with default configuration"),
        (status = 422, description = "Unknown node type token")
    )
)]
pub async fn create_node(
    State(state): State<AppState>,
    Json(request): Json<CreateNodeRequest>,
) -> Result<(StatusCode, Json<Node>), ApiError> {
    let Some(kind) = NodeKind::from_token(&request.node_type) else {
        return Err(ApiError::unprocessable(format!(
            "Unknown node type: {}",
            request.node_type
        )));
    };

    let node = Node::new(kind, request.position);
    info!("Creating {} node {}", kind.token(), node.id);
    let mut store = state.store.lock().await;
    store.add_node(node.clone());
    Ok((StatusCode::CREATED, Json(node)))
}

/// DELETE /flow/nodes/{node_id} - remove a node and its incident edges
#[utoipa::path(
    delete,
    path = "/flow/nodes/{node_id}",
    tag = "Flow",
    responses(
        (status = 204, description = "Node and incident edges removed"),
        (status = 404, description = "Node not found")
    )
)]
pub async fn delete_node(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.lock().await;
    if store.remove_node(&node_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("node", &node_id))
    }
}

/// PATCH /flow/nodes/{node_id}/data - shallow-merge a data patch
#[utoipa::path(
    patch,
    path = "/flow/nodes/{node_id}/data",
    tag = "Flow",
    responses(
        (status = 200, description = "Patched node"),
        (status = 404, description = "Node not found")
    )
)]
pub async fn patch_node_data(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Node>, ApiError> {
    let mut store = state.store.lock().await;
    if store.get_node(&node_id).is_none() {
        return Err(ApiError::not_found("node", &node_id));
    }
    store.update_node_data(&node_id, &patch);
    // A rejected patch leaves the node unchanged; return whatever now holds.
    match store.get_node(&node_id) {
        Some(node) => Ok(Json(node.clone())),
        None => Err(ApiError::not_found("node", &node_id)),
    }
}

/// PUT /flow/edges - replace the full edge collection
#[utoipa::path(
    put,
    path = "/flow/edges",
    tag = "Flow",
    responses((status = 200, description = "Edge collection replaced"))
)]
pub async fn replace_edges(
    State(state): State<AppState>,
    Json(edges): Json<Vec<Edge>>,
) -> Json<Value> {
    let mut store = state.store.lock().await;
    store.set_edges(edges);
    Json(json!({ "edges": store.edges() }))
}

/// POST /flow/edges - connect two nodes
#[utoipa::path(
    post,
    path = "/flow/edges",
    tag = "Flow",
    request_body = CreateEdgeRequest,
    responses((status = 201, description = "Edge created"))
)]
pub async fn create_edge(
    State(state): State<AppState>,
    Json(request): Json<CreateEdgeRequest>,
) -> (StatusCode, Json<Edge>) {
    // Duplicate edges between the same endpoints are allowed.
    let edge = Edge::new(request.source, request.target);
    let mut store = state.store.lock().await;
    store.add_edge(edge.clone());
    (StatusCode::CREATED, Json(edge))
}

/// DELETE /flow/edges/{edge_id}
#[utoipa::path(
    delete,
    path = "/flow/edges/{edge_id}",
    tag = "Flow",
    responses(
        (status = 204, description = "Edge removed"),
        (status = 404, description = "Edge not found")
    )
)]
pub async fn delete_edge(
    State(state): State<AppState>,
    Path(edge_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.lock().await;
    if store.remove_edge(&edge_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("edge", &edge_id))
    }
}

/// GET /flow/selection - the node whose configuration panel is open
#[utoipa::path(
    get,
    path = "/flow/selection",
    tag = "Flow",
    responses((status = 200, description = "Selected node, or null"))
)]
pub async fn get_selection(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().await;
    Json(json!({ "selectedNode": store.selected_node() }))
}

/// PUT /flow/selection - select a node (or clear with a null id)
#[utoipa::path(
    put,
    path = "/flow/selection",
    tag = "Flow",
    request_body = SelectionRequest,
    responses(
        (status = 200, description = "Selection updated"),
        (status = 404, description = "Node not found")
    )
)]
pub async fn set_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.lock().await;
    let requested = request.node_id.clone();
    if !store.set_selected_node(request.node_id) {
        let id = requested.unwrap_or_default();
        return Err(ApiError::not_found("node", &id));
    }
    Ok(Json(json!({ "selectedNode": store.selected_node() })))
}

/// GET /flow/validate - cycle and dangling-edge report
#[utoipa::path(
    get,
    path = "/flow/validate",
    tag = "Flow",
    responses((status = 200, description = "Validation report"))
)]
pub async fn validate_flow(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().await;
    Json(json!({
        "hasCycles": graph::has_cycles(store.edges()),
        "danglingEdges": graph::dangling_edges(store.nodes(), store.edges()),
    }))
}
