use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A point stored in the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexPoint {
    pub id: String,
    pub vector: Vec<f32>,
    /// Text payload returned verbatim on retrieval.
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// A ranked hit returned from an index query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexHit {
    pub content: String,
    /// Similarity score reported by the index (higher = closer).
    pub score: f32,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// Collection statistics, used by ingestion tooling and health checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub points: usize,
    pub dimensions: usize,
}
