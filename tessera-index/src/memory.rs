//! In-process brute-force cosine index.
//!
//! Linear scan over all points per query. Fast enough for corpora in the
//! low tens of thousands of chunks; beyond that, use the remote index.

use tessera_core::errors::{IndexError, TesseraResult};
use tessera_core::models::{IndexHit, IndexPoint, IndexStats};
use tessera_core::traits::IVectorIndex;

/// Brute-force cosine-similarity index held entirely in memory.
pub struct MemoryIndex {
    dimensions: usize,
    points: Vec<IndexPoint>,
}

impl MemoryIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            points: Vec::new(),
        }
    }

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }

    fn check_dimensions(&self, vector: &[f32]) -> TesseraResult<()> {
        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                got: vector.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IVectorIndex for MemoryIndex {
    fn query(&self, vector: &[f32], limit: usize) -> TesseraResult<Vec<IndexHit>> {
        self.check_dimensions(vector)?;

        let mut hits: Vec<IndexHit> = self
            .points
            .iter()
            .map(|p| IndexHit {
                content: p.content.clone(),
                score: Self::cosine(vector, &p.vector),
                metadata: p.metadata.clone(),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);
        Ok(hits)
    }

    fn upsert(&mut self, points: &[IndexPoint]) -> TesseraResult<()> {
        for point in points {
            self.check_dimensions(&point.vector)?;
        }
        for point in points {
            match self.points.iter_mut().find(|p| p.id == point.id) {
                Some(existing) => *existing = point.clone(),
                None => self.points.push(point.clone()),
            }
        }
        Ok(())
    }

    fn stats(&self) -> TesseraResult<IndexStats> {
        Ok(IndexStats {
            points: self.points.len(),
            dimensions: self.dimensions,
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
