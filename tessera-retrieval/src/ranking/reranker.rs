//! Second-pass subject boost and final ordering.
//!
//! The boost is assigned, never accumulated, so reranking an
//! already-ranked list changes neither scores nor order.

use tessera_core::config::ScoringConfig;

use super::scorer::ScoredCandidate;

/// Assign the subject boost and stable-sort by final score descending.
///
/// Ties keep their relative input order, which reflects variant priority:
/// the original query's hits enter the pool first.
pub fn rerank(mut scored: Vec<ScoredCandidate>, config: &ScoringConfig) -> Vec<ScoredCandidate> {
    let terms_lower: Vec<String> = config
        .subject_terms
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    for item in &mut scored {
        let content_lower = item.candidate.content.to_lowercase();
        let mentions_subject = terms_lower.iter().any(|t| content_lower.contains(t.as_str()));
        item.subject_boost = if mentions_subject {
            config.subject_boost
        } else {
            0.0
        };
    }

    // sort_by is stable; equal final scores preserve input order.
    scored.sort_by(|a, b| {
        b.final_score()
            .partial_cmp(&a.final_score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
