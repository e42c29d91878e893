use serde::{Deserialize, Serialize};

use super::defaults;

/// One alias entry: a canonical key and the surface forms it expands to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasRule {
    /// Key matched as a substring of the normalized query.
    pub canonical: String,
    /// Surface-form synonyms substituted for the key and appended standalone.
    pub synonyms: Vec<String>,
}

/// One topic entry: trigger keywords and the supplementary queries they inject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRule {
    pub name: String,
    /// Any of these words appearing in the normalized query triggers the topic.
    pub keywords: Vec<String>,
    /// Fixed query strings appended to the variant pool when triggered.
    pub supplements: Vec<String>,
}

/// Query expansion configuration.
///
/// The expansion policy is a data artifact: alias and topic tables are
/// enumerated here so they can be tested independently of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Hard cap on the number of variants produced per query.
    pub max_variants: usize,
    pub aliases: Vec<AliasRule>,
    pub topics: Vec<TopicRule>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_variants: defaults::DEFAULT_MAX_VARIANTS,
            aliases: Vec::new(),
            topics: Vec::new(),
        }
    }
}
