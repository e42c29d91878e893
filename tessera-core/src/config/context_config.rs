use serde::{Deserialize, Serialize};

use super::defaults;

/// Context assembly configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Character budget for the assembled context. Content lengths are
    /// counted against it; joining separators and score annotations are not.
    pub max_chars: usize,
    /// Prefix each context entry with its relevance score.
    pub annotate_scores: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_chars: defaults::DEFAULT_MAX_CONTEXT_CHARS,
            annotate_scores: true,
        }
    }
}
