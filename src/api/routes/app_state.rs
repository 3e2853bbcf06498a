//! Application state management.
//!
//! Defines the AppState struct holding the shared project store and the
//! field cache service.

use std::path::Path;
use std::sync::Arc;

use axum::extract::FromRef;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::services::FieldCacheService;
use crate::storage::ProjectStore;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Consolidated project store (flow graph, registries, settings)
    pub store: Arc<Mutex<ProjectStore>>,
    /// Field cache persisted to the data directory
    pub field_cache: Arc<FieldCacheService>,
}

impl AppState {
    /// Create application state with defaults. The data directory comes from
    /// the `DATA_DIR` environment variable, falling back to `./data`.
    pub fn new() -> Self {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self::with_store(ProjectStore::new(Utc::now()), Path::new(&data_dir))
    }

    /// Create application state from an explicit store and data directory.
    /// Used by tests to control settings generation and cache placement.
    pub fn with_store(store: ProjectStore, data_dir: &Path) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            field_cache: Arc::new(FieldCacheService::new(data_dir)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromRef<AppState> for Arc<Mutex<ProjectStore>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<FieldCacheService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.field_cache.clone()
    }
}
