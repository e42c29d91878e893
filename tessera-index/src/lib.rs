//! # tessera-index
//!
//! Vector index clients behind the `IVectorIndex` seam: an in-process
//! brute-force cosine index (always available; the test substrate and
//! adequate for small corpora) and a REST client for a remote collection
//! behind the `remote` feature.

pub mod memory;
#[cfg(feature = "remote")]
pub mod rest;

pub use memory::MemoryIndex;
#[cfg(feature = "remote")]
pub use rest::RestIndex;
