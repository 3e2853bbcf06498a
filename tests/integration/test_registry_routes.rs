//! Model, role, route and settings registry integration tests.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use flow_builder_api::routes::{self, AppState};
use flow_builder_api::storage::ProjectStore;
use serde_json::{Value, json};
use tempfile::TempDir;

fn test_server() -> (TestServer, TempDir) {
    let data_dir = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let state = AppState::with_store(ProjectStore::new(now), data_dir.path());
    let app = axum::Router::new()
        .nest("/api/v1", routes::create_api_router())
        .with_state(state);
    (TestServer::new(app).unwrap(), data_dir)
}

#[tokio::test]
async fn test_create_model_without_seeding() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/v1/models")
        .json(&json!({
            "name": "Post",
            "fields": [
                { "name": "id", "type": "primary key" },
                { "name": "title", "type": "string" }
            ]
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["model"]["name"], json!("Post"));
    assert_eq!(body["seededRoutes"], json!([]));

    let routes_list: Value = server.get("/api/v1/routes").await.json();
    assert_eq!(routes_list, json!([]));
}

#[tokio::test]
async fn test_create_model_with_crud_seeding() {
    let (server, _dir) = test_server();

    let body: Value = server
        .post("/api/v1/models")
        .json(&json!({
            "name": "Post",
            "fields": [
                { "name": "id", "type": "primary key" },
                { "name": "title", "type": "string" }
            ],
            "createCrudApis": true
        }))
        .await
        .json();

    let seeded = body["seededRoutes"].as_array().unwrap();
    assert_eq!(seeded.len(), 3);
    assert_eq!(seeded[0]["name"], json!("Get All Post"));
    assert_eq!(seeded[0]["url"], json!("/api/post"));
    assert_eq!(seeded[2]["method"], json!("DELETE"));

    // Seeded routes land in the registry with their flows attached.
    let routes_list: Value = server.get("/api/v1/routes").await.json();
    let routes_arr = routes_list.as_array().unwrap();
    assert_eq!(routes_arr.len(), 3);
    assert_eq!(routes_arr[0]["flowData"]["nodes"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_model_rejects_blank_name() {
    let (server, _dir) = test_server();

    let response = server
        .post("/api/v1/models")
        .json(&json!({ "name": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_model() {
    let (server, _dir) = test_server();

    let created: Value = server
        .post("/api/v1/models")
        .json(&json!({ "name": "Post" }))
        .await
        .json();
    let model_id = created["model"]["id"].as_str().unwrap();

    let updated: Value = server
        .put(&format!("/api/v1/models/{}", model_id))
        .json(&json!({
            "name": "Article",
            "fields": [{ "name": "id", "type": "primary key" }]
        }))
        .await
        .json();
    assert_eq!(updated["name"], json!("Article"));

    let fetched: Value = server.get(&format!("/api/v1/models/{}", model_id)).await.json();
    assert_eq!(fetched["fields"].as_array().unwrap().len(), 1);

    let missing = server
        .put("/api/v1/models/model_missing")
        .json(&json!({ "name": "X" }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_model_schema_translation() {
    let (server, _dir) = test_server();

    let created: Value = server
        .post("/api/v1/models")
        .json(&json!({
            "name": "Post",
            "fields": [
                { "name": "id", "type": "primary key" },
                { "name": "body", "type": "long text" }
            ]
        }))
        .await
        .json();
    let model_id = created["model"]["id"].as_str().unwrap();

    let schema: Value = server
        .get(&format!("/api/v1/models/{}/schema", model_id))
        .await
        .json();
    assert_eq!(schema["name"], json!("Post"));
    assert_eq!(schema["fields"][0]["type"], json!("INTEGER"));
    assert_eq!(schema["fields"][0]["isPrimaryKey"], json!(true));
    assert_eq!(schema["fields"][1]["type"], json!("TEXT"));
    assert_eq!(schema["fields"][1]["defaultValue"], json!(null));
}

#[tokio::test]
async fn test_role_lifecycle() {
    let (server, _dir) = test_server();

    let created = server
        .post("/api/v1/roles")
        .json(&json!({ "name": "Content Editor!" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);

    let role: Value = created.json();
    assert_eq!(role["slug"], json!("content-editor"));
    let role_id = role["id"].as_str().unwrap();

    // PUT replaces wholesale; the submitted slug is kept, not re-derived.
    let mut updated_role = role.clone();
    updated_role["name"] = json!("Chief Editor");
    updated_role["permissions"]["canManageRoles"] = json!(true);
    let updated: Value = server
        .put(&format!("/api/v1/roles/{}", role_id))
        .json(&updated_role)
        .await
        .json();
    assert_eq!(updated["name"], json!("Chief Editor"));
    assert_eq!(updated["slug"], json!("content-editor"));
    assert_eq!(updated["permissions"]["canManageRoles"], json!(true));

    // Delete is idempotent.
    let deleted = server.delete(&format!("/api/v1/roles/{}", role_id)).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
    let again = server.delete(&format!("/api/v1/roles/{}", role_id)).await;
    assert_eq!(again.status_code(), StatusCode::NO_CONTENT);

    let roles: Value = server.get("/api/v1/roles").await.json();
    assert_eq!(roles, json!([]));
}

#[tokio::test]
async fn test_route_lifecycle_and_flow_save() {
    let (server, _dir) = test_server();

    let created: Value = server
        .post("/api/v1/routes")
        .json(&json!({ "name": "List Posts", "method": "GET", "url": "/api/posts" }))
        .await
        .json();
    let route_id = created["id"].as_str().unwrap();
    assert!(created.get("flowData").is_none());

    let saved: Value = server
        .put(&format!("/api/v1/routes/{}/flow", route_id))
        .json(&json!({
            "nodes": [{
                "id": "url_1",
                "position": { "x": 100.0, "y": 100.0 },
                "type": "url",
                "data": { "label": "URL", "path": "/api/posts" }
            }],
            "edges": []
        }))
        .await
        .json();
    assert_eq!(saved["flowData"]["nodes"].as_array().unwrap().len(), 1);

    let missing = server
        .put("/api/v1/routes/route_missing/flow")
        .json(&json!({ "nodes": [], "edges": [] }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let deleted = server.delete(&format!("/api/v1/routes/{}", route_id)).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_settings_roundtrip() {
    let (server, _dir) = test_server();

    let defaults: Value = server.get("/api/v1/settings").await.json();
    assert_eq!(defaults["databaseType"], json!("mysql"));
    assert_eq!(defaults["dbName"], json!("database_2024-06-01"));

    let mut updated = defaults.clone();
    updated["dbHost"] = json!("db.internal");
    updated["timezone"] = json!("Europe/London");
    let saved: Value = server.put("/api/v1/settings").json(&updated).await.json();
    assert_eq!(saved["dbHost"], json!("db.internal"));

    let fetched: Value = server.get("/api/v1/settings").await.json();
    assert_eq!(fetched["timezone"], json!("Europe/London"));
}

#[tokio::test]
async fn test_field_cache_roundtrip() {
    let (server, _dir) = test_server();

    let empty: Value = server.get("/api/v1/cache/fields").await.json();
    assert_eq!(empty, json!({}));

    let saved = server
        .put("/api/v1/cache/fields")
        .json(&json!({ "model_name": "Post", "field_count": 2 }))
        .await;
    assert_eq!(saved.status_code(), StatusCode::NO_CONTENT);

    let loaded: Value = server.get("/api/v1/cache/fields").await.json();
    assert_eq!(loaded["model_name"], json!("Post"));
    assert_eq!(loaded["field_count"], json!(2));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (server, _dir) = test_server();

    let response = server.get("/api/v1/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let doc: Value = response.json();
    assert!(doc["paths"].as_object().unwrap().contains_key("/flow"));
    assert!(doc["paths"].as_object().unwrap().contains_key("/models"));
}
