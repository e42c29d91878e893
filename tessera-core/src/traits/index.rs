use crate::errors::TesseraResult;
use crate::models::{IndexHit, IndexPoint, IndexStats};

/// Vector index client.
pub trait IVectorIndex: Send + Sync {
    /// Return the top-`limit` nearest neighbors for `vector`, best first.
    fn query(&self, vector: &[f32], limit: usize) -> TesseraResult<Vec<IndexHit>>;

    /// Insert or replace points. Used by ingestion tooling, not the
    /// answer path.
    fn upsert(&mut self, points: &[IndexPoint]) -> TesseraResult<()>;

    /// Collection statistics.
    fn stats(&self) -> TesseraResult<IndexStats>;

    /// The vector dimensionality this index is configured for.
    fn dimensions(&self) -> usize;
}
