//! Error taxonomy for the pipeline.
//!
//! Per-subsystem enums aggregated into [`TesseraError`]. Configuration
//! errors are fatal at startup; everything else is handled at the seam
//! where it occurs. The public `answer` boundary never propagates any
//! of these.

mod config_error;
mod embedding_error;
mod generation_error;
mod index_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use index_error::IndexError;

/// Result alias used across all Tessera crates.
pub type TesseraResult<T> = Result<T, TesseraError>;

/// Top-level error aggregating every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
