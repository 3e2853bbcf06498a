//! Field cache service persisting panel field values as a flat JSON record.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

/// Fixed cache file name. All documents share it, so the last writer wins.
const FIELD_CACHE_FILE: &str = "field-cache.json";

/// Service for persisting a flat `{fieldId: value}` record between sessions.
pub struct FieldCacheService {
    cache_file_path: PathBuf,
}

impl FieldCacheService {
    /// Create a field cache rooted in the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            cache_file_path: data_dir.join(FIELD_CACHE_FILE),
        }
    }

    /// Save the cached field values, overwriting any previous record.
    pub fn save(&self, values: &HashMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.cache_file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(values)
            .context("Failed to serialize field cache")?;
        fs::write(&self.cache_file_path, content)
            .with_context(|| format!("Failed to write field cache to {:?}", self.cache_file_path))?;

        info!(
            "Field cache saved: {} entries to {:?}",
            values.len(),
            self.cache_file_path
        );
        Ok(())
    }

    /// Load the cached field values. A missing file is not an error and
    /// yields an empty record.
    pub fn load(&self) -> Result<HashMap<String, Value>> {
        if !self.cache_file_path.exists() {
            warn!("Field cache file not found: {:?}", self.cache_file_path);
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.cache_file_path)
            .with_context(|| format!("Failed to read field cache from {:?}", self.cache_file_path))?;
        let values = serde_json::from_str(&content)
            .context("Failed to parse field cache")?;
        Ok(values)
    }
}
