use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed link declaring execution order between two nodes. Duplicates
/// between the same endpoints are allowed; no dedup invariant is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: format!("edge_{}", Uuid::new_v4()),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn connects(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
