use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Primary provider: "rest" or "hash".
    pub provider: String,
    /// Vector dimensionality. Must match the index's configured size;
    /// a mismatch is rejected at pipeline construction.
    pub dimensions: usize,
    /// Inference endpoint for the REST provider.
    pub endpoint: String,
    /// Environment variable holding the REST provider's API token.
    pub api_key_env: String,
    /// L1 embedding cache capacity (entries).
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_EMBEDDING_API_KEY_ENV.to_string(),
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}
