/// Vector index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("index query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("index upsert failed: {reason}")]
    UpsertFailed { reason: String },

    #[error("point dimension mismatch: index holds {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
