use crate::errors::TesseraResult;

/// Sampling parameters forwarded to the generation provider.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Text generation provider.
pub trait IGenerator: Send + Sync {
    /// Produce a completion for the given system and user prompts.
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &SamplingParams,
    ) -> TesseraResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
