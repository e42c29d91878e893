use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote vector index configuration (ignored by the in-process index).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Base URL of the index service.
    pub url: String,
    /// Collection holding the document chunks.
    pub collection: String,
    /// Environment variable holding the index API key.
    pub api_key_env: String,
    /// Vector size the collection was created with. Must match the
    /// embedding provider's dimensionality.
    pub dimensions: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_INDEX_URL.to_string(),
            collection: defaults::DEFAULT_INDEX_COLLECTION.to_string(),
            api_key_env: defaults::DEFAULT_INDEX_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
