//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod cache;
pub mod error;
pub mod export;
pub mod flow;
pub mod models;
pub mod openapi;
pub mod roles;
pub mod route_defs;
pub mod settings;

use axum::Router;

pub use app_state::AppState;

/// Create the main API router combining all route modules
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/flow", flow::flow_router())
        .nest("/models", models::models_router())
        .nest("/roles", roles::roles_router())
        .nest("/routes", route_defs::route_defs_router())
        .nest("/settings", settings::settings_router())
        .nest("/export", export::export_router())
        .nest("/cache", cache::cache_router())
        .merge(openapi::openapi_router())
    // State is applied by the caller (main or TestServer).
}

/// Create the application state.
pub fn create_app_state() -> AppState {
    AppState::new()
}
