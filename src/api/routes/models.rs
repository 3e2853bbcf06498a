//! Model registry routes.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::models::{Field, Model};
use crate::services::{SeedingService, TranslationService};

use super::app_state::AppState;
use super::error::ApiError;

/// Request body for creating a model. `createCrudApis` opts in to seeding the
/// default CRUD routes for the new model.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub create_crud_apis: bool,
}

/// Request body for updating a model.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateModelRequest {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Create the models router
pub fn models_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_models).post(create_model))
        .route("/{model_id}", get(get_model).put(update_model))
        .route("/{model_id}/schema", get(get_model_schema))
}

/// GET /models - all registered models
#[utoipa::path(
    get,
    path = "/models",
    tag = "Models",
    responses((status = 200, description = "All models", body = [Model]))
)]
pub async fn get_models(State(state): State<AppState>) -> Json<Vec<Model>> {
    let store = state.store.lock().await;
    Json(store.models().to_vec())
}

/// POST /models - create a model, optionally seeding its CRUD routes
#[utoipa::path(
    post,
    path = "/models",
    tag = "Models",
    request_body = CreateModelRequest,
    responses((status = 201, description = "Created model plus any seeded routes"))
)]
pub async fn create_model(
    State(state): State<AppState>,
    Json(request): Json<CreateModelRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::unprocessable("Model name must not be empty"));
    }

    let mut model = Model::new(request.name);
    model.fields = request.fields;

    let mut store = state.store.lock().await;
    let seeded = if request.create_crud_apis {
        let routes = SeedingService::seed_crud_routes(&model);
        info!("Seeding {} CRUD routes for model {}", routes.len(), model.name);
        for route in &routes {
            store.add_route(route.clone());
        }
        routes
    } else {
        Vec::new()
    };
    store.add_model(model.clone());

    Ok((
        StatusCode::CREATED,
        Json(json!({ "model": model, "seededRoutes": seeded })),
    ))
}

/// GET /models/{model_id}
#[utoipa::path(
    get,
    path = "/models/{model_id}",
    tag = "Models",
    responses(
        (status = 200, description = "Model", body = Model),
        (status = 404, description = "Model not found")
    )
)]
pub async fn get_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<Model>, ApiError> {
    let store = state.store.lock().await;
    match store.get_model(&model_id) {
        Some(model) => Ok(Json(model.clone())),
        None => Err(ApiError::not_found("model", &model_id)),
    }
}

/// PUT /models/{model_id} - replace name and fields
#[utoipa::path(
    put,
    path = "/models/{model_id}",
    tag = "Models",
    request_body = UpdateModelRequest,
    responses(
        (status = 200, description = "Updated model", body = Model),
        (status = 404, description = "Model not found")
    )
)]
pub async fn update_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
    Json(request): Json<UpdateModelRequest>,
) -> Result<Json<Model>, ApiError> {
    let model = Model {
        id: model_id.clone(),
        name: request.name,
        fields: request.fields,
    };

    let mut store = state.store.lock().await;
    if store.update_model(model.clone()) {
        Ok(Json(model))
    } else {
        Err(ApiError::not_found("model", &model_id))
    }
}

/// GET /models/{model_id}/schema - external schema translation
#[utoipa::path(
    get,
    path = "/models/{model_id}/schema",
    tag = "Models",
    responses(
        (status = 200, description = "Translated external schema"),
        (status = 404, description = "Model not found")
    )
)]
pub async fn get_model_schema(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.lock().await;
    match store.get_model(&model_id) {
        Some(model) => Ok(Json(TranslationService::translate_model(model))),
        None => Err(ApiError::not_found("model", &model_id)),
    }
}
