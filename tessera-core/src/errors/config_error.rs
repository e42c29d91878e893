/// Configuration and startup validation errors. Fatal, never per-request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing credential: environment variable {name} is not set")]
    MissingCredential { name: String },

    #[error("vector dimension mismatch: provider produces {provider}, index expects {index}")]
    DimensionMismatch { provider: usize, index: usize },

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },
}
