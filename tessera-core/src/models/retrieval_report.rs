use serde::{Deserialize, Serialize};

/// A per-variant retrieval failure, kept as data rather than a log line
/// so failure counts and reasons stay observable to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantFailure {
    /// The expanded query variant whose embed or index call failed.
    pub variant: String,
    pub reason: String,
}

/// Observability record for one retrieval pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalReport {
    /// Query variants issued to the index.
    pub variants_issued: usize,
    pub variants_failed: usize,
    /// Raw hits collected across all variants, before deduplication.
    pub raw_hits: usize,
    /// Candidates surviving deduplication.
    pub deduped: usize,
    pub failures: Vec<VariantFailure>,
}
