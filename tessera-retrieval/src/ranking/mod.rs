//! Ranking pipeline: deduplicate → score → rerank.

pub mod dedup;
pub mod reranker;
pub mod scorer;

use tessera_core::config::ScoringConfig;
use tessera_core::models::Candidate;

pub use scorer::ScoredCandidate;

/// Full ranking pass over the raw candidate pool.
pub struct RankingPipeline {
    config: ScoringConfig,
}

impl RankingPipeline {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Deduplicate by content fingerprint, score against the normalized
    /// query, and rerank with the subject boost.
    pub fn rank(&self, query: &str, candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
        let unique = dedup::dedupe(candidates);
        let scored = scorer::score(query, &unique, &self.config);
        reranker::rerank(scored, &self.config)
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
