//! # tessera-generation
//!
//! Grounded answer generation for the pipeline: prompt construction, a
//! chat-completion REST client behind the `remote` feature, and the
//! `AnswerPipeline` orchestrator, the public entry point whose `answer`
//! always returns a string.

#[cfg(feature = "remote")]
pub mod chat;
pub mod orchestrator;
pub mod prompt;

#[cfg(feature = "remote")]
pub use chat::ChatRestGenerator;
pub use orchestrator::{AnswerPipeline, PipelineStage};
