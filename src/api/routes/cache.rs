//! Field cache routes.

use std::collections::HashMap;

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use serde_json::Value;
use tracing::warn;

use super::app_state::AppState;
use super::error::ApiError;

/// Create the field cache router
pub fn cache_router() -> Router<AppState> {
    Router::new().route("/fields", get(get_cached_fields).put(save_cached_fields))
}

/// GET /cache/fields - the persisted field value record
#[utoipa::path(
    get,
    path = "/cache/fields",
    tag = "Cache",
    responses((status = 200, description = "Cached field values"))
)]
pub async fn get_cached_fields(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Value>>, ApiError> {
    state.field_cache.load().map(Json).map_err(|e| {
        warn!("Failed to load field cache: {:#}", e);
        ApiError::internal("Failed to load field cache")
    })
}

/// PUT /cache/fields - replace the record; the last writer wins
#[utoipa::path(
    put,
    path = "/cache/fields",
    tag = "Cache",
    responses((status = 204, description = "Field values saved"))
)]
pub async fn save_cached_fields(
    State(state): State<AppState>,
    Json(values): Json<HashMap<String, Value>>,
) -> Result<StatusCode, ApiError> {
    state.field_cache.save(&values).map_err(|e| {
        warn!("Failed to save field cache: {:#}", e);
        ApiError::internal("Failed to save field cache")
    })?;
    Ok(StatusCode::NO_CONTENT)
}
