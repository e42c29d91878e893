//! # tessera-core
//!
//! Foundation crate for the Tessera answer pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TesseraConfig;
pub use errors::{TesseraError, TesseraResult};
pub use models::{Candidate, DegradationEvent, RetrievalReport, VariantFailure};
