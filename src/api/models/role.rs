use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub auth_required: bool,
    /// Ids of routes this role may call.
    #[serde(default)]
    pub routes: Vec<String>,
    #[serde(default)]
    pub can_create_users: bool,
    #[serde(default)]
    pub can_edit_users: bool,
    #[serde(default)]
    pub can_delete_users: bool,
    #[serde(default)]
    pub can_manage_roles: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Role {
    pub id: String,
    pub name: String,
    /// Slug-case form of the name, derived once at creation time. Renaming a
    /// role later does not recompute it.
    pub slug: String,
    pub permissions: Permissions,
}

impl Role {
    pub fn new(name: impl Into<String>, permissions: Permissions) -> Self {
        let name = name.into();
        Self {
            id: format!("role_{}", Uuid::new_v4()),
            slug: slugify(&name),
            name,
            permissions,
        }
    }
}

/// Lowercase the name, collapse runs of non-alphanumerics into single
/// hyphens, and strip leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
