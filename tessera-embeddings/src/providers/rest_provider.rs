//! REST embedding provider.
//!
//! Calls a sentence-embedding inference endpoint that accepts
//! `{"inputs": ...}` and returns the raw vector(s) as JSON (the
//! HuggingFace Inference API shape).

use std::time::Duration;

use tessera_core::config::EmbeddingConfig;
use tessera_core::errors::{EmbeddingError, TesseraResult};
use tessera_core::traits::IEmbeddingProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Remote embedding provider over HTTP.
///
/// Unavailable (and skipped by the fallback chain) when no API token is
/// present in the configured environment variable.
pub struct RestEmbedder {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
    dimensions: usize,
}

impl RestEmbedder {
    pub fn from_config(config: &EmbeddingConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).ok();
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            dimensions: config.dimensions,
        }
    }

    fn post(&self, body: serde_json::Value) -> TesseraResult<serde_json::Value> {
        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().map_err(|e| EmbeddingError::RequestFailed {
            reason: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::RequestFailed {
                reason: format!("endpoint returned {status}"),
            }
            .into());
        }
        response
            .json()
            .map_err(|e| {
                EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn check_dimensions(&self, vector: &[f32]) -> TesseraResult<()> {
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for RestEmbedder {
    fn embed(&self, text: &str) -> TesseraResult<Vec<f32>> {
        let value = self.post(serde_json::json!({ "inputs": text }))?;
        let vector: Vec<f32> =
            serde_json::from_value(value).map_err(|e| EmbeddingError::MalformedResponse {
                reason: e.to_string(),
            })?;
        self.check_dimensions(&vector)?;
        Ok(vector)
    }

    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        let value = self.post(serde_json::json!({ "inputs": texts }))?;
        let vectors: Vec<Vec<f32>> =
            serde_json::from_value(value).map_err(|e| EmbeddingError::MalformedResponse {
                reason: e.to_string(),
            })?;
        for vector in &vectors {
            self.check_dimensions(vector)?;
        }
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "rest"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}
