//! EmbeddingEngine — the entry point for query embedding.
//!
//! Wraps provider selection, the fallback chain, and the L1 cache into a
//! single interface the retriever can hold.

use moka::sync::Cache;
use tessera_core::config::EmbeddingConfig;
use tessera_core::errors::{EmbeddingError, TesseraResult};
use tessera_core::models::DegradationEvent;
use tracing::{debug, info};

use crate::degradation::DegradationChain;
use crate::providers::{self, HashFallbackEmbedder};

/// The main embedding engine.
pub struct EmbeddingEngine {
    chain: DegradationChain,
    cache: Cache<String, Vec<f32>>,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    ///
    /// The configured primary goes first in the chain; the hash embedder
    /// always closes it as the last resort. If the primary already is the
    /// hash embedder the duplicate is harmless; the first available
    /// provider wins.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let mut chain = DegradationChain::new();
        chain.push(providers::create_provider(config));
        chain.push(Box::new(HashFallbackEmbedder::new(config.dimensions)));

        let cache = Cache::new(config.l1_cache_size);

        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "embedding engine initialized"
        );

        Self {
            chain,
            cache,
            dimensions: config.dimensions,
        }
    }

    /// Embed a query variant, consulting the cache first.
    ///
    /// Identical input always yields an identical vector: cache hits are
    /// exact, and every provider in the chain is deterministic for a
    /// fixed model.
    pub fn embed_query(&mut self, text: &str) -> TesseraResult<Vec<f32>> {
        let key = blake3::hash(text.as_bytes()).to_hex().to_string();
        if let Some(vector) = self.cache.get(&key) {
            debug!(hash = %key, "embedding cache hit");
            return Ok(vector);
        }

        let (vector, _served_by) = self.chain.embed(text)?;
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }

        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    /// Drain degradation events accumulated since the last call.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    /// Name of the currently active provider.
    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(&EmbeddingConfig {
            provider: "hash".to_string(),
            dimensions: 64,
            ..Default::default()
        })
    }

    #[test]
    fn reports_configured_dimensions() {
        let engine = hash_engine();
        assert_eq!(engine.dimensions(), 64);
        assert_eq!(engine.active_provider(), "hash-fallback");
    }

    #[test]
    fn embed_query_returns_correct_dims() {
        let mut engine = hash_engine();
        let vector = engine.embed_query("test query").unwrap();
        assert_eq!(vector.len(), 64);
    }

    #[test]
    fn embed_query_is_deterministic_across_cache() {
        let mut engine = hash_engine();
        let first = engine.embed_query("cached query").unwrap();
        let second = engine.embed_query("cached query").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_degradation_events_when_primary_serves() {
        let mut engine = hash_engine();
        engine.embed_query("test").unwrap();
        assert!(engine.drain_degradation_events().is_empty());
    }

    #[test]
    fn rest_primary_without_token_falls_back_and_records() {
        // The rest provider is unavailable without its token, so the chain
        // skips it silently and the hash embedder serves the request.
        let mut engine = EmbeddingEngine::new(&EmbeddingConfig {
            provider: "rest".to_string(),
            dimensions: 32,
            api_key_env: "TESSERA_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        });
        let vector = engine.embed_query("query").unwrap();
        assert_eq!(vector.len(), 32);
        assert_eq!(engine.active_provider(), "hash-fallback");

        let events = engine.drain_degradation_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].fallback_used, "hash-fallback");
    }
}
