//! Per-variant retrieval fan-out.
//!
//! Each variant is embedded and queried independently. One variant's
//! failure is recorded and skipped; it never aborts the others.

use tessera_core::models::{Candidate, VariantFailure};
use tessera_core::traits::IVectorIndex;
use tessera_embeddings::EmbeddingEngine;
use tracing::{debug, warn};

/// Raw hits plus per-variant failures from one retrieval pass.
#[derive(Debug, Default)]
pub struct RetrievalOutcome {
    pub candidates: Vec<Candidate>,
    pub failures: Vec<VariantFailure>,
}

/// Issues one index query per expanded variant and collects raw hits.
pub struct Retriever {
    top_k: usize,
}

impl Retriever {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    /// Retrieve the top-k hits for every variant.
    ///
    /// Variants are processed in order and hits concatenated in that
    /// order, which keeps downstream tie-breaks deterministic: the
    /// original query's hits sit nearest the front of the pool.
    pub fn retrieve(
        &self,
        embedder: &mut EmbeddingEngine,
        index: &dyn IVectorIndex,
        variants: &[String],
    ) -> RetrievalOutcome {
        let mut outcome = RetrievalOutcome::default();

        for variant in variants {
            let hits = embedder
                .embed_query(variant)
                .and_then(|vector| index.query(&vector, self.top_k));

            match hits {
                Ok(hits) => {
                    debug!(variant = %variant, hits = hits.len(), "variant retrieved");
                    outcome
                        .candidates
                        .extend(hits.into_iter().map(|hit| Candidate {
                            content: hit.content,
                            raw_score: hit.score,
                            metadata: hit.metadata,
                            source_variant: variant.clone(),
                        }));
                }
                Err(e) => {
                    warn!(
                        variant = %variant,
                        error = %e,
                        "variant retrieval failed, continuing with remaining variants"
                    );
                    outcome.failures.push(VariantFailure {
                        variant: variant.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }
}
