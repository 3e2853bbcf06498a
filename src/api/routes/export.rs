//! Configuration export route.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Json},
    routing::get,
};
use tracing::info;

use crate::services::ExportService;

use super::app_state::AppState;

/// Create the export router
pub fn export_router() -> Router<AppState> {
    Router::new().route("/configuration", get(export_configuration))
}

/// GET /export/configuration - download the translated configuration
#[utoipa::path(
    get,
    path = "/export/configuration",
    tag = "Export",
    responses((status = 200, description = "Configuration document as a JSON attachment"))
)]
pub async fn export_configuration(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().await;
    let configuration =
        ExportService::build_configuration(store.models(), store.roles(), store.routes());
    info!(
        "Exporting configuration: {} models, {} roles",
        store.models().len(),
        store.roles().len()
    );

    (
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"configuration.json\"",
        )],
        Json(configuration),
    )
}
