//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation
//! generation.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Flow graph
        crate::routes::flow::get_flow,
        crate::routes::flow::replace_nodes,
        crate::routes::flow::create_node,
        crate::routes::flow::delete_node,
        crate::routes::flow::patch_node_data,
        crate::routes::flow::replace_edges,
        crate::routes::flow::create_edge,
        crate::routes::flow::delete_edge,
        crate::routes::flow::get_selection,
        crate::routes::flow::set_selection,
        crate::routes::flow::validate_flow,
        // Models
        crate::routes::models::get_models,
        crate::routes::models::create_model,
        crate::routes::models::get_model,
        crate::routes::models::update_model,
        crate::routes::models::get_model_schema,
        // Roles
        crate::routes::roles::get_roles,
        crate::routes::roles::create_role,
        crate::routes::roles::update_role,
        crate::routes::roles::delete_role,
        // Routes
        crate::routes::route_defs::get_routes,
        crate::routes::route_defs::create_route,
        crate::routes::route_defs::update_route,
        crate::routes::route_defs::delete_route,
        crate::routes::route_defs::save_route_flow,
        // Settings
        crate::routes::settings::get_settings,
        crate::routes::settings::update_settings,
        // Export
        crate::routes::export::export_configuration,
        // Cache
        crate::routes::cache::get_cached_fields,
        crate::routes::cache::save_cached_fields,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::Model,
        crate::models::Field,
        crate::models::ValidationOptions,
        crate::models::Role,
        crate::models::Permissions,
        crate::models::Settings,
        crate::models::Position,
        crate::models::HttpMethod,
        crate::routes::flow::CreateNodeRequest,
        crate::routes::flow::CreateEdgeRequest,
        crate::routes::flow::SelectionRequest,
        crate::routes::models::CreateModelRequest,
        crate::routes::models::UpdateModelRequest,
        crate::routes::roles::CreateRoleRequest,
        crate::routes::route_defs::CreateRouteRequest,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Flow", description = "Flow graph nodes, edges and selection"),
        (name = "Models", description = "Model registry and schema translation"),
        (name = "Roles", description = "Role registry"),
        (name = "Routes", description = "Route definitions and saved flow graphs"),
        (name = "Settings", description = "Global project settings"),
        (name = "Export", description = "Configuration export"),
        (name = "Cache", description = "Persisted panel field values"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Flow Builder API",
        description = "REST API behind the visual API/flow builder canvas",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8081/api/v1", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Keep the served document's version in sync with Cargo.toml.
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
