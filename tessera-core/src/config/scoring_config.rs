use serde::{Deserialize, Serialize};

use super::defaults;

/// Composite relevance scoring configuration.
///
/// The score is additive rather than normalized: each signal contributes
/// an inspectable bonus, so a candidate's ranking can be audited term by
/// term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Bonus when the normalized query occurs verbatim in the content.
    pub exact_match_bonus: f64,
    /// Bonus per identity pattern present in both query and content.
    pub identity_bonus: f64,
    /// Weight per distinct query word found among the content's tokens.
    pub overlap_weight: f64,
    /// Bonus for content shorter than `concise_threshold`.
    pub concise_bonus: f64,
    /// Content length (chars) below which the conciseness bonus applies.
    pub concise_threshold: usize,
    /// Boost assigned during rerank when content mentions a subject term.
    pub subject_boost: f64,
    /// Patterns that mark identity mentions (e.g. a person's name variants).
    pub identity_patterns: Vec<String>,
    /// Terms identifying the corpus subject, used by the rerank boost pass.
    pub subject_terms: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_match_bonus: defaults::DEFAULT_EXACT_MATCH_BONUS,
            identity_bonus: defaults::DEFAULT_IDENTITY_BONUS,
            overlap_weight: defaults::DEFAULT_OVERLAP_WEIGHT,
            concise_bonus: defaults::DEFAULT_CONCISE_BONUS,
            concise_threshold: defaults::DEFAULT_CONCISE_THRESHOLD,
            subject_boost: defaults::DEFAULT_SUBJECT_BOOST,
            identity_patterns: Vec::new(),
            subject_terms: Vec::new(),
        }
    }
}
