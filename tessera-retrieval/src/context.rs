//! Context assembly under a character budget.

use tessera_core::config::ContextConfig;
use tracing::debug;

use crate::ranking::ScoredCandidate;

/// Separator between context entries; matches the chunk separator used at
/// ingestion time.
const SEPARATOR: &str = "\n\n";

/// Packs ranked candidates into a bounded context string.
pub struct ContextAssembler {
    config: ContextConfig,
}

impl ContextAssembler {
    pub fn new(config: ContextConfig) -> Self {
        Self { config }
    }

    /// Walk the ranked list and append entries until the next candidate's
    /// content would overflow the budget, truncating at the element
    /// boundary. Content lengths count against the budget; separators and
    /// score annotations do not.
    ///
    /// Returns the empty string when even the first candidate exceeds the
    /// budget.
    pub fn assemble(&self, ranked: &[ScoredCandidate]) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut used = 0usize;

        for item in ranked {
            let length = item.candidate.content.len();
            if used + length > self.config.max_chars {
                break;
            }
            used += length;
            if self.config.annotate_scores {
                parts.push(format!(
                    "[score: {:.1}] {}",
                    item.final_score(),
                    item.candidate.content
                ));
            } else {
                parts.push(item.candidate.content.clone());
            }
        }

        debug!(
            included = parts.len(),
            chars = used,
            budget = self.config.max_chars,
            "context assembled"
        );
        parts.join(SEPARATOR)
    }
}
