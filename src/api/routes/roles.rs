//! Role registry routes.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;

use crate::models::{Permissions, Role};

use super::app_state::AppState;
use super::error::ApiError;

/// Request body for creating a role. The slug is derived from the name at
/// creation time and never recomputed afterwards.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub permissions: Permissions,
}

/// Create the roles router
pub fn roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roles).post(create_role))
        .route(
            "/{role_id}",
            axum::routing::put(update_role).delete(delete_role),
        )
}

/// GET /roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    responses((status = 200, description = "All roles", body = [Role]))
)]
pub async fn get_roles(State(state): State<AppState>) -> Json<Vec<Role>> {
    let store = state.store.lock().await;
    Json(store.roles().to_vec())
}

/// POST /roles - create a role with a derived slug
#[utoipa::path(
    post,
    path = "/roles",
    tag = "Roles",
    request_body = CreateRoleRequest,
    responses((status = 201, description = "Created role", body = Role))
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(request): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<Role>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::unprocessable("Role name must not be empty"));
    }

    let role = Role::new(request.name, request.permissions);
    let mut store = state.store.lock().await;
    store.add_role(role.clone());
    Ok((StatusCode::CREATED, Json(role)))
}

/// PUT /roles/{role_id} - replace the role wholesale. The submitted slug is
/// kept as-is; renames do not re-derive it.
#[utoipa::path(
    put,
    path = "/roles/{role_id}",
    tag = "Roles",
    request_body = Role,
    responses(
        (status = 200, description = "Updated role", body = Role),
        (status = 404, description = "Role not found")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(mut role): Json<Role>,
) -> Result<Json<Role>, ApiError> {
    role.id = role_id.clone();
    let mut store = state.store.lock().await;
    if store.update_role(role.clone()) {
        Ok(Json(role))
    } else {
        Err(ApiError::not_found("role", &role_id))
    }
}

/// DELETE /roles/{role_id} - identity-based removal; unknown ids are a no-op
#[utoipa::path(
    delete,
    path = "/roles/{role_id}",
    tag = "Roles",
    responses((status = 204, description = "Role removed (or did not exist)"))
)]
pub async fn delete_role(State(state): State<AppState>, Path(role_id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.delete_role(&role_id);
    StatusCode::NO_CONTENT
}
