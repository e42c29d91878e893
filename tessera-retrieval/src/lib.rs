//! # tessera-retrieval
//!
//! Multi-query retrieval for the answer pipeline: query expansion,
//! per-variant index fan-out, cross-variant deduplication, additive
//! composite scoring, subject-boost reranking, and context assembly
//! under a character budget.

pub mod context;
pub mod engine;
pub mod expansion;
pub mod ranking;
pub mod retriever;

pub use context::ContextAssembler;
pub use engine::RetrievalEngine;
pub use expansion::QueryExpander;
pub use ranking::{RankingPipeline, ScoredCandidate};
pub use retriever::{RetrievalOutcome, Retriever};
