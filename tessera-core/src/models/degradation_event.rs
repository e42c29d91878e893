use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a fallback taken somewhere in the pipeline.
///
/// Retrieval quality silently degrades when a fallback serves a request,
/// so every fallback is recorded and surfaced to the host process rather
/// than only logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Subsystem that degraded (e.g. "embeddings").
    pub component: String,
    /// What failed.
    pub failure: String,
    /// Name of the fallback that served the request.
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
