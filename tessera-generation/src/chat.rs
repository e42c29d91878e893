//! Chat-completion REST client.
//!
//! Speaks the OpenAI-compatible `/chat/completions` shape used by hosted
//! inference providers. The API token must resolve at construction:
//! a missing credential is a startup failure, not a per-request one.

use std::time::Duration;

use serde_json::json;
use tessera_core::config::GenerationConfig;
use tessera_core::errors::{ConfigError, GenerationError, TesseraResult};
use tessera_core::traits::{IGenerator, SamplingParams};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Remote chat-completion generator over HTTP.
pub struct ChatRestGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatRestGenerator {
    pub fn from_config(config: &GenerationConfig) -> TesseraResult<Self> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| ConfigError::MissingCredential {
                name: config.api_key_env.clone(),
            })?;
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

impl IGenerator for ChatRestGenerator {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &SamplingParams,
    ) -> TesseraResult<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| GenerationError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::RequestFailed {
                reason: format!("provider returned {status}"),
            }
            .into());
        }

        let value: serde_json::Value =
            response.json().map_err(|e| GenerationError::RequestFailed {
                reason: e.to_string(),
            })?;

        let text = value["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .trim()
            .to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyCompletion.into());
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "chat-rest"
    }
}
