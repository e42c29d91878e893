//! Additive composite relevance scorer.
//!
//! Four signals, each contributing an inspectable bonus: verbatim
//! substring match, identity-pattern co-occurrence, distinct-word
//! overlap, and conciseness. Scores are not normalized; the additive
//! trail is the audit record of why a candidate ranked where it did.

use std::collections::HashSet;

use tessera_core::config::ScoringConfig;
use tessera_core::models::Candidate;

/// Candidate plus its composite score.
///
/// The rerank boost is kept apart from the base score so boosted and
/// unboosted contributions stay separately inspectable.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Additive base score from the four scoring signals.
    pub base_score: f64,
    /// Subject boost assigned by the rerank pass; zero until then.
    pub subject_boost: f64,
}

impl ScoredCandidate {
    pub fn final_score(&self) -> f64 {
        self.base_score + self.subject_boost
    }
}

/// Score candidates against the normalized query, preserving input order.
pub fn score(
    query: &str,
    candidates: &[Candidate],
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    let query_lower = query.to_lowercase();
    let query_words: HashSet<&str> = query_lower.split_whitespace().collect();
    let patterns_lower: Vec<String> = config
        .identity_patterns
        .iter()
        .map(|p| p.to_lowercase())
        .collect();

    candidates
        .iter()
        .map(|candidate| {
            let content_lower = candidate.content.to_lowercase();
            let mut base_score = 0.0;

            // Verbatim substring match.
            if !query_lower.is_empty() && content_lower.contains(&query_lower) {
                base_score += config.exact_match_bonus;
            }

            // Identity patterns present in both query and content.
            for pattern in &patterns_lower {
                if query_lower.contains(pattern.as_str())
                    && content_lower.contains(pattern.as_str())
                {
                    base_score += config.identity_bonus;
                }
            }

            // Distinct query words appearing among the content's tokens.
            let content_words: HashSet<&str> = content_lower.split_whitespace().collect();
            let overlap = query_words
                .iter()
                .filter(|w| content_words.contains(*w))
                .count();
            base_score += overlap as f64 * config.overlap_weight;

            // Conciseness: dense chunks beat long diffuse ones.
            if candidate.content.len() < config.concise_threshold {
                base_score += config.concise_bonus;
            }

            ScoredCandidate {
                candidate: candidate.clone(),
                base_score,
                subject_boost: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn candidate(content: &str) -> Candidate {
        Candidate {
            content: content.to_string(),
            raw_score: 0.5,
            metadata: HashMap::new(),
            source_variant: "q".to_string(),
        }
    }

    fn config() -> ScoringConfig {
        ScoringConfig {
            identity_patterns: vec!["ada lovelace".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn exact_substring_earns_full_bonus() {
        let scored = score(
            "analytical engine",
            &[candidate("notes on the analytical engine design")],
            &config(),
        );
        // 10.0 exact + 2.0 × 2 overlap + 2.0 concise.
        assert_eq!(scored[0].base_score, 16.0);
    }

    #[test]
    fn identity_pattern_needs_both_sides() {
        let cfg = config();
        let both = score(
            "who is ada lovelace",
            &[candidate("ada lovelace wrote the first program")],
            &cfg,
        );
        let content_only = score(
            "who wrote the first program",
            &[candidate("ada lovelace wrote the first program")],
            &cfg,
        );
        assert!(both[0].base_score > content_only[0].base_score);
    }

    #[test]
    fn word_overlap_counts_distinct_words_once() {
        let scored = score(
            "engine engine engine",
            &[candidate("the engine room")],
            &config(),
        );
        // One distinct query word overlaps: 2.0 + 2.0 concise.
        assert_eq!(scored[0].base_score, 4.0);
    }

    #[test]
    fn long_content_loses_conciseness_bonus() {
        let long_content = "x ".repeat(300);
        let scored = score("unrelated", &[candidate(&long_content)], &config());
        assert_eq!(scored[0].base_score, 0.0);
    }

    #[test]
    fn empty_query_scores_no_exact_match() {
        let scored = score("", &[candidate("anything")], &config());
        // Only the conciseness bonus fires.
        assert_eq!(scored[0].base_score, 2.0);
    }

    #[test]
    fn preserves_input_order() {
        let scored = score(
            "query",
            &[candidate("first"), candidate("second"), candidate("third")],
            &config(),
        );
        let contents: Vec<&str> = scored
            .iter()
            .map(|s| s.candidate.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }
}
