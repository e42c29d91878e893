/// Generation provider errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("completion request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}
