use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A retrieved content chunk plus its retrieval metadata, before scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Immutable text payload from the index.
    pub content: String,
    /// Similarity score reported by the index.
    pub raw_score: f32,
    /// Payload metadata carried through from the hit.
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    /// The query variant that produced this hit.
    pub source_variant: String,
}

impl Candidate {
    /// Stable content fingerprint used for cross-variant deduplication.
    ///
    /// Hashes the verbatim content bytes, so whitespace-only differences
    /// produce distinct fingerprints.
    pub fn fingerprint(&self) -> String {
        blake3::hash(self.content.as_bytes()).to_hex().to_string()
    }
}
