//! OpenAPI specification endpoint.

use axum::{Router, response::Json, routing::get};
use serde_json::Value;
use utoipa::OpenApi;

use super::app_state::AppState;
use crate::api::openapi::ApiDoc;

/// Create the OpenAPI router
pub fn openapi_router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi_json))
}

/// GET /openapi.json - the generated OpenAPI document
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "OpenAPI",
    responses((status = 200, description = "OpenAPI specification"))
)]
pub async fn serve_openapi_json() -> Json<Value> {
    Json(serde_json::json!(ApiDoc::openapi()))
}
