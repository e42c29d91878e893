use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use tessera_core::config::{AliasRule, ContextConfig, ExpansionConfig, ScoringConfig, TopicRule};
use tessera_core::models::Candidate;
use tessera_retrieval::context::ContextAssembler;
use tessera_retrieval::expansion::{normalize, QueryExpander};
use tessera_retrieval::ranking::{dedup, reranker, ScoredCandidate};

fn expander() -> QueryExpander {
    QueryExpander::new(ExpansionConfig {
        max_variants: 5,
        aliases: vec![AliasRule {
            canonical: "ada".to_string(),
            synonyms: vec!["ada lovelace".to_string(), "lovelace".to_string()],
        }],
        topics: vec![TopicRule {
            name: "work".to_string(),
            keywords: vec!["work".to_string(), "project".to_string()],
            supplements: vec!["ada lovelace projects".to_string()],
        }],
    })
}

fn candidate(content: &str, variant: &str) -> Candidate {
    Candidate {
        content: content.to_string(),
        raw_score: 0.5,
        metadata: HashMap::new(),
        source_variant: variant.to_string(),
    }
}

fn arb_candidates() -> impl Strategy<Value = Vec<Candidate>> {
    // A small content alphabet guarantees duplicates appear often.
    prop::collection::vec(("[abc]{1,3}", "[xy]{1,2}"), 0..20)
        .prop_map(|pairs| {
            pairs
                .iter()
                .map(|(content, variant)| candidate(content, variant))
                .collect()
        })
}

fn arb_scored() -> impl Strategy<Value = Vec<ScoredCandidate>> {
    prop::collection::vec(("[a-e]{1,12}", 0.0f64..20.0), 0..16).prop_map(|pairs| {
        pairs
            .iter()
            .map(|(content, base)| ScoredCandidate {
                candidate: candidate(content, "q"),
                base_score: *base,
                subject_boost: 0.0,
            })
            .collect()
    })
}

// ── Expansion bounds ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn expand_returns_one_to_five_variants(query in "[a-zA-Z ?!.]{1,60}") {
        prop_assume!(!normalize(&query).is_empty());

        let variants = expander().expand(&query);
        prop_assert!(!variants.is_empty());
        prop_assert!(variants.len() <= 5);
    }

    #[test]
    fn expand_keeps_normalized_original_first(query in "[a-zA-Z ?!.]{1,60}") {
        let normalized = normalize(&query);
        prop_assume!(!normalized.is_empty());

        let variants = expander().expand(&query);
        prop_assert_eq!(&variants[0], &normalized);
    }

    #[test]
    fn expand_has_no_duplicates_or_empties(query in "[a-zA-Z ?!.]{1,60}") {
        prop_assume!(!normalize(&query).is_empty());

        let variants = expander().expand(&query);
        let unique: HashSet<&String> = variants.iter().collect();
        prop_assert_eq!(unique.len(), variants.len());
        prop_assert!(variants.iter().all(|v| !v.trim().is_empty()));
    }
}

// ── Dedup idempotence and order preservation ─────────────────────────────

proptest! {
    #[test]
    fn dedupe_is_idempotent(candidates in arb_candidates()) {
        let once = dedup::dedupe(candidates);
        let twice = dedup::dedupe(once.clone());

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            prop_assert_eq!(&a.content, &b.content);
            prop_assert_eq!(&a.source_variant, &b.source_variant);
        }
    }

    #[test]
    fn dedupe_preserves_first_seen_order(candidates in arb_candidates()) {
        let deduped = dedup::dedupe(candidates.clone());

        // Every surviving candidate is the earliest occurrence of its content.
        let mut cursor = 0;
        for survivor in &deduped {
            let position = candidates[cursor..]
                .iter()
                .position(|c| c.content == survivor.content)
                .expect("survivor must come from the input");
            cursor += position + 1;
            prop_assert_eq!(&survivor.source_variant, &candidates[cursor - 1].source_variant);
        }
    }
}

// ── Rerank ordering ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rerank_output_is_non_increasing(scored in arb_scored()) {
        let config = ScoringConfig::default();
        let ranked = reranker::rerank(scored, &config);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].final_score() >= pair[1].final_score());
        }
    }

    #[test]
    fn rerank_is_idempotent(scored in arb_scored()) {
        let config = ScoringConfig {
            subject_terms: vec!["a".to_string()],
            ..Default::default()
        };
        let once = reranker::rerank(scored, &config);
        let twice = reranker::rerank(once.clone(), &config);

        for (x, y) in once.iter().zip(&twice) {
            prop_assert_eq!(&x.candidate.content, &y.candidate.content);
            prop_assert_eq!(x.final_score(), y.final_score());
        }
    }
}

// ── Context budget ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn assemble_respects_budget(
        scored in arb_scored(),
        max_chars in 1usize..64,
    ) {
        let assembler = ContextAssembler::new(ContextConfig {
            max_chars,
            annotate_scores: false,
        });
        let context = assembler.assemble(&scored);

        // Included content counts against the budget; only the "\n\n"
        // separators between entries sit on top.
        let separators = 2 * scored.len().saturating_sub(1);
        prop_assert!(context.len() <= max_chars + separators);
    }

    #[test]
    fn assemble_single_oversized_candidate_is_empty(content in "[a-z]{10,40}") {
        let assembler = ContextAssembler::new(ContextConfig {
            max_chars: 5,
            annotate_scores: false,
        });
        let scored = vec![ScoredCandidate {
            candidate: candidate(&content, "q"),
            base_score: 1.0,
            subject_boost: 0.0,
        }];
        prop_assert!(assembler.assemble(&scored).is_empty());
    }
}
