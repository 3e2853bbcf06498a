//! Global settings routes.

use axum::{Router, extract::State, response::Json, routing::get};

use crate::models::Settings;

use super::app_state::AppState;

/// Create the settings router
pub fn settings_router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

/// GET /settings - the single global settings record
#[utoipa::path(
    get,
    path = "/settings",
    tag = "Settings",
    responses((status = 200, description = "Current settings", body = Settings))
)]
pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let store = state.store.lock().await;
    Json(store.settings().clone())
}

/// PUT /settings - wholesale replace
#[utoipa::path(
    put,
    path = "/settings",
    tag = "Settings",
    request_body = Settings,
    responses((status = 200, description = "Updated settings", body = Settings))
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Json<Settings> {
    let mut store = state.store.lock().await;
    store.update_settings(settings);
    Json(store.settings().clone())
}
