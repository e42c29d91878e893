//! Embedding providers: REST inference endpoint + deterministic hash
//! fallback. Providers are capability-tagged through `name()` so callers
//! and tests can tell which strategy served a request.

mod hash_fallback;
mod rest_provider;

pub use hash_fallback::HashFallbackEmbedder;
pub use rest_provider::RestEmbedder;

use tessera_core::config::EmbeddingConfig;
use tessera_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Instantiate the primary provider named in the config.
///
/// An unrecognized provider name degrades to the hash embedder so a bad
/// config still yields a working pipeline.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "rest" => Box::new(RestEmbedder::from_config(config)),
        "hash" => Box::new(HashFallbackEmbedder::new(config.dimensions)),
        other => {
            warn!(
                provider = other,
                "unknown embedding provider, using hash fallback"
            );
            Box::new(HashFallbackEmbedder::new(config.dimensions))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_hash_provider_by_name() {
        let config = EmbeddingConfig {
            provider: "hash".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config);
        assert_eq!(provider.name(), "hash-fallback");
    }

    #[test]
    fn unknown_provider_name_degrades_to_hash() {
        let config = EmbeddingConfig {
            provider: "bogus".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config);
        assert_eq!(provider.name(), "hash-fallback");
    }
}
