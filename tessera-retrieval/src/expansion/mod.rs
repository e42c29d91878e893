//! Query expansion: alias substitution + topic-keyword injection.
//!
//! One raw question becomes a bounded pool of variants. The normalized
//! original always leads the pool, so downstream tie-breaks favor its hits.

pub mod normalize;

use std::collections::HashSet;

use tessera_core::config::ExpansionConfig;
use tracing::debug;

pub use normalize::normalize;

/// Expands a raw query into a bounded set of variants, driven entirely by
/// the alias and topic tables in the config.
pub struct QueryExpander {
    config: ExpansionConfig,
}

impl QueryExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// Expand `query` into between 1 and `max_variants` variants.
    ///
    /// The normalized original is always the first entry. For every alias
    /// key found in the normalized query, each synonym is substituted for
    /// the key and also appended standalone; any triggered topic appends
    /// its supplementary queries. The pool is then trimmed, deduplicated
    /// by exact equality, purged of empties, and capped.
    ///
    /// A query that normalizes to the empty string yields the single
    /// empty-string variant; callers guard this before retrieval.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return vec![normalized];
        }

        let mut pool = vec![normalized.clone()];

        for rule in &self.config.aliases {
            if !normalized.contains(rule.canonical.as_str()) {
                continue;
            }
            for synonym in &rule.synonyms {
                pool.push(normalized.replace(rule.canonical.as_str(), synonym));
                pool.push(synonym.clone());
            }
        }

        for topic in &self.config.topics {
            let triggered = topic
                .keywords
                .iter()
                .any(|kw| normalized.contains(kw.as_str()));
            if triggered {
                pool.extend(topic.supplements.iter().cloned());
            }
        }

        let mut seen = HashSet::new();
        let mut variants: Vec<String> = Vec::new();
        for entry in pool {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_string()) {
                variants.push(trimmed.to_string());
            }
        }
        variants.truncate(self.config.max_variants);

        debug!(query = %normalized, variants = variants.len(), "expanded query");
        variants
    }
}
