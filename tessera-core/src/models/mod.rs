//! Request-scoped data model: candidates, index wire types, observability
//! records. All of these are created at the start of a request and
//! discarded at the end; nothing here outlives one `answer` call.

mod candidate;
mod degradation_event;
mod index;
mod retrieval_report;

pub use candidate::Candidate;
pub use degradation_event::DegradationEvent;
pub use index::{IndexHit, IndexPoint, IndexStats};
pub use retrieval_report::{RetrievalReport, VariantFailure};
