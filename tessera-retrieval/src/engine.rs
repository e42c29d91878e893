//! RetrievalEngine: expansion → per-variant fan-out → dedup → score →
//! rerank. Generation sits above this, in tessera-generation.

use tessera_core::config::{ExpansionConfig, RetrievalConfig, ScoringConfig};
use tessera_core::models::RetrievalReport;
use tessera_core::traits::IVectorIndex;
use tessera_embeddings::EmbeddingEngine;
use tracing::info;

use crate::expansion::QueryExpander;
use crate::ranking::{RankingPipeline, ScoredCandidate};
use crate::retriever::Retriever;

/// Orchestrates one retrieval pass from raw question to ranked candidates.
pub struct RetrievalEngine {
    expander: QueryExpander,
    retriever: Retriever,
    ranking: RankingPipeline,
}

impl RetrievalEngine {
    pub fn new(
        expansion: ExpansionConfig,
        retrieval: RetrievalConfig,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            expander: QueryExpander::new(expansion),
            retriever: Retriever::new(retrieval.top_k),
            ranking: RankingPipeline::new(scoring),
        }
    }

    /// Run retrieval for one question.
    ///
    /// Returns the ranked candidates and the observability report for the
    /// pass. Candidates are scored against the normalized original query
    /// (always the first expansion variant).
    pub fn retrieve(
        &self,
        embedder: &mut EmbeddingEngine,
        index: &dyn IVectorIndex,
        question: &str,
    ) -> (Vec<ScoredCandidate>, RetrievalReport) {
        let variants = self.expander.expand(question);
        let normalized = variants.first().cloned().unwrap_or_default();

        let outcome = self.retriever.retrieve(embedder, index, &variants);
        let raw_hits = outcome.candidates.len();

        let ranked = self.ranking.rank(&normalized, outcome.candidates);

        let report = RetrievalReport {
            variants_issued: variants.len(),
            variants_failed: outcome.failures.len(),
            raw_hits,
            deduped: ranked.len(),
            failures: outcome.failures,
        };

        info!(
            variants = report.variants_issued,
            failed = report.variants_failed,
            hits = report.raw_hits,
            ranked = report.deduped,
            "retrieval complete"
        );

        (ranked, report)
    }
}
