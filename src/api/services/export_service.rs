//! Configuration export.
//!
//! Builds the downloadable configuration document: every model projected
//! through the translation service, plus roles with their route ids resolved
//! to method/url pairs.

use serde_json::{Value, json};

use super::translation_service::TranslationService;
use crate::models::{Model, Role, Route};

pub struct ExportService;

impl ExportService {
    /// Assemble the exported configuration document.
    pub fn build_configuration(models: &[Model], roles: &[Role], routes: &[Route]) -> Value {
        let translated: Vec<Value> = models
            .iter()
            .map(TranslationService::translate_model)
            .collect();

        let exported_roles: Vec<Value> = roles
            .iter()
            .map(|role| {
                // Route ids that no longer resolve are dropped from the export.
                let resolved_routes: Vec<Value> = role
                    .permissions
                    .routes
                    .iter()
                    .filter_map(|route_id| routes.iter().find(|r| &r.id == route_id))
                    .map(|route| {
                        json!({
                            "method": route.method,
                            "url": route.url,
                        })
                    })
                    .collect();

                json!({
                    "name": role.name,
                    "slug": role.slug,
                    "permissions": {
                        "authRequired": role.permissions.auth_required,
                        "routes": resolved_routes,
                        "canCreateUsers": role.permissions.can_create_users,
                        "canEditUsers": role.permissions.can_edit_users,
                        "canDeleteUsers": role.permissions.can_delete_users,
                        "canManageRoles": role.permissions.can_manage_roles,
                    },
                })
            })
            .collect();

        json!({
            "models": translated,
            "roles": exported_roles,
        })
    }
}
