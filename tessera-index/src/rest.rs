//! REST client for a remote vector collection.
//!
//! Speaks the Qdrant-style HTTP API: points are upserted with a `content`
//! payload field plus free-form `metadata`, and queries return ranked
//! points with payloads attached.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::{json, Value};
use tessera_core::config::IndexConfig;
use tessera_core::errors::{IndexError, TesseraResult};
use tessera_core::models::{IndexHit, IndexPoint, IndexStats};
use tessera_core::traits::IVectorIndex;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Remote vector index over HTTP.
pub struct RestIndex {
    client: reqwest::blocking::Client,
    url: String,
    collection: String,
    api_key: Option<String>,
    dimensions: usize,
}

impl RestIndex {
    pub fn from_config(config: &IndexConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).ok();
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: config.url.trim_end_matches('/').to_string(),
            collection: config.collection.clone(),
            api_key,
            dimensions: config.dimensions,
        }
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> TesseraResult<Value> {
        let mut request = request;
        if let Some(key) = &self.api_key {
            request = request.header("api-key", key);
        }
        let response = request.send().map_err(|e| IndexError::QueryFailed {
            reason: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::QueryFailed {
                reason: format!("index returned {status}"),
            }
            .into());
        }
        response.json().map_err(|e| {
            IndexError::QueryFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn parse_hit(point: &Value) -> IndexHit {
        let payload = &point["payload"];
        let metadata: HashMap<String, Value> = payload["metadata"]
            .as_object()
            .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        IndexHit {
            content: payload["content"].as_str().unwrap_or_default().to_string(),
            score: point["score"].as_f64().unwrap_or_default() as f32,
            metadata,
        }
    }
}

impl IVectorIndex for RestIndex {
    fn query(&self, vector: &[f32], limit: usize) -> TesseraResult<Vec<IndexHit>> {
        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                got: vector.len(),
            }
            .into());
        }

        let body = json!({
            "query": vector,
            "limit": limit,
            "with_payload": true,
        });
        let url = format!("{}/collections/{}/points/query", self.url, self.collection);
        let value = self.send(self.client.post(&url).json(&body))?;

        let points = value["result"]["points"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        Ok(points.iter().map(Self::parse_hit).collect())
    }

    fn upsert(&mut self, points: &[IndexPoint]) -> TesseraResult<()> {
        let body = json!({
            "points": points
                .iter()
                .map(|p| {
                    json!({
                        "id": p.id,
                        "vector": p.vector,
                        "payload": { "content": p.content, "metadata": p.metadata },
                    })
                })
                .collect::<Vec<_>>(),
        });
        let url = format!("{}/collections/{}/points", self.url, self.collection);
        self.send(self.client.put(&url).json(&body))
            .map_err(|e| match e {
                tessera_core::TesseraError::IndexError(IndexError::QueryFailed { reason }) => {
                    IndexError::UpsertFailed { reason }.into()
                }
                other => other,
            })?;
        Ok(())
    }

    fn stats(&self) -> TesseraResult<IndexStats> {
        let url = format!("{}/collections/{}", self.url, self.collection);
        let value = self.send(self.client.get(&url))?;
        Ok(IndexStats {
            points: value["result"]["points_count"].as_u64().unwrap_or_default() as usize,
            dimensions: value["result"]["config"]["params"]["vectors"]["size"]
                .as_u64()
                .unwrap_or(self.dimensions as u64) as usize,
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
