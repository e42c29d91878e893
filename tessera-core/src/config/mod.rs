//! Pipeline configuration: serde structs with TOML loading and full
//! defaults. Missing fields in a partial config take their defaults.

pub mod defaults;

mod context_config;
mod embedding_config;
mod expansion_config;
mod generation_config;
mod index_config;
mod retrieval_config;
mod scoring_config;

pub use context_config::ContextConfig;
pub use embedding_config::EmbeddingConfig;
pub use expansion_config::{AliasRule, ExpansionConfig, TopicRule};
pub use generation_config::GenerationConfig;
pub use index_config::IndexConfig;
pub use retrieval_config::RetrievalConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TesseraResult};

/// Top-level Tessera configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseraConfig {
    pub expansion: ExpansionConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
    pub scoring: ScoringConfig,
    pub context: ContextConfig,
    pub generation: GenerationConfig,
}

impl TesseraConfig {
    /// Parse a config from TOML.
    pub fn from_toml(input: &str) -> TesseraResult<Self> {
        toml::from_str(input).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
