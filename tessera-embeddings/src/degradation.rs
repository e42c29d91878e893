//! Provider fallback chain.
//!
//! Providers are tried in priority order. Every fallback records a
//! `DegradationEvent`: retrieval quality silently degrades when the hash
//! embedder serves a request, so the host must be able to see it happened.

use chrono::Utc;
use tessera_core::constants::COMPONENT_EMBEDDINGS;
use tessera_core::errors::{EmbeddingError, TesseraResult};
use tessera_core::models::DegradationEvent;
use tessera_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Ordered chain of embedding providers with degradation tracking.
#[derive(Default)]
pub struct DegradationChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    /// Degradation events accumulated since the last drain.
    events: Vec<DegradationEvent>,
}

impl DegradationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider at the end of the chain (lowest priority so far).
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed `text` with the first provider that succeeds.
    ///
    /// Returns the vector and the name of the provider that produced it.
    /// A success from any provider past the first records a degradation
    /// event naming the primary.
    pub fn embed(&mut self, text: &str) -> TesseraResult<(Vec<f32>, String)> {
        let primary = self
            .providers
            .first()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "none".to_string());
        let mut last_error = None;

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match provider.embed(text) {
                Ok(vector) => {
                    let served_by = provider.name().to_string();
                    if i > 0 {
                        self.events.push(DegradationEvent {
                            component: COMPONENT_EMBEDDINGS.to_string(),
                            failure: format!("{primary} unavailable"),
                            fallback_used: served_by.clone(),
                            timestamp: Utc::now(),
                        });
                    }
                    return Ok((vector, served_by));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: "all providers exhausted".to_string(),
            }
            .into()
        }))
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
