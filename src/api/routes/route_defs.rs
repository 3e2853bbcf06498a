//! Route registry endpoints: the generated backend routes being designed,
//! including saving a flow graph onto a route.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;

use crate::models::{FlowData, HttpMethod, Route};

use super::app_state::AppState;
use super::error::ApiError;

/// Request body for creating a route definition.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateRouteRequest {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
}

/// Create the route-definitions router
pub fn route_defs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_routes).post(create_route))
        .route(
            "/{route_id}",
            axum::routing::put(update_route).delete(delete_route),
        )
        .route("/{route_id}/flow", axum::routing::put(save_route_flow))
}

/// GET /routes
#[utoipa::path(
    get,
    path = "/routes",
    tag = "Routes",
    responses((status = 200, description = "All route definitions"))
)]
pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    let store = state.store.lock().await;
    Json(store.routes().to_vec())
}

/// POST /routes
#[utoipa::path(
    post,
    path = "/routes",
    tag = "Routes",
    request_body = CreateRouteRequest,
    responses((status = 201, description = "Created route definition"))
)]
pub async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<(StatusCode, Json<Route>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::unprocessable("Route name must not be empty"));
    }

    let route = Route::new(request.name, request.method, request.url);
    let mut store = state.store.lock().await;
    store.add_route(route.clone());
    Ok((StatusCode::CREATED, Json(route)))
}

/// PUT /routes/{route_id} - replace the route wholesale
#[utoipa::path(
    put,
    path = "/routes/{route_id}",
    tag = "Routes",
    responses(
        (status = 200, description = "Updated route definition"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn update_route(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
    Json(mut route): Json<Route>,
) -> Result<Json<Route>, ApiError> {
    route.id = route_id.clone();
    let mut store = state.store.lock().await;
    if store.update_route(route.clone()) {
        Ok(Json(route))
    } else {
        Err(ApiError::not_found("route", &route_id))
    }
}

/// DELETE /routes/{route_id} - unknown ids are a no-op
#[utoipa::path(
    delete,
    path = "/routes/{route_id}",
    tag = "Routes",
    responses((status = 204, description = "Route removed (or did not exist)"))
)]
pub async fn delete_route(State(state): State<AppState>, Path(route_id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.delete_route(&route_id);
    StatusCode::NO_CONTENT
}

/// PUT /routes/{route_id}/flow - persist a flow graph onto the route
#[utoipa::path(
    put,
    path = "/routes/{route_id}/flow",
    tag = "Routes",
    responses(
        (status = 200, description = "Flow data saved"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn save_route_flow(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
    Json(flow_data): Json<FlowData>,
) -> Result<Json<Route>, ApiError> {
    let mut store = state.store.lock().await;
    if !store.set_route_flow(&route_id, flow_data) {
        return Err(ApiError::not_found("route", &route_id));
    }
    match store.get_route(&route_id) {
        Some(route) => Ok(Json(route.clone())),
        None => Err(ApiError::not_found("route", &route_id)),
    }
}
