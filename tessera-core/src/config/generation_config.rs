use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation provider configuration, including the fixed response strings
/// the pipeline returns without invoking the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
    /// OpenAI-compatible API base URL.
    pub endpoint: String,
    /// Environment variable holding the provider's API token.
    pub api_key_env: String,
    /// Sampling temperature. Low by default; answers should be reproducible.
    pub temperature: f64,
    /// Output token budget per completion.
    pub max_tokens: u32,
    /// Fixed response when retrieval produces no usable context.
    pub refusal: String,
    /// Prefix for provider failures surfaced as answers.
    pub error_prefix: String,
    /// Response to an empty or whitespace-only question.
    pub prompt_for_input: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            endpoint: defaults::DEFAULT_GENERATION_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_GENERATION_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            refusal: defaults::DEFAULT_REFUSAL.to_string(),
            error_prefix: defaults::DEFAULT_ERROR_PREFIX.to_string(),
            prompt_for_input: defaults::DEFAULT_PROMPT_FOR_INPUT.to_string(),
        }
    }
}
