//! Deterministic hash-projection fallback provider.
//!
//! Expands a blake3 digest of the text into a fixed-dimension vector.
//! No network, no model files, always available, and reproducible:
//! the same text maps to the same vector on every run.

use tessera_core::errors::TesseraResult;
use tessera_core::traits::IEmbeddingProvider;

/// Word count of the leading/trailing windows blended into the projection.
const WINDOW_WORDS: usize = 5;

/// Hash-projection fallback embedding provider.
///
/// Far less semantically rich than a sentence-transformer embedding, but
/// deterministic and dependency-free. The final vector averages the
/// projections of the full text and of its leading and trailing word
/// windows, which keeps short prefixes/suffixes of a chunk close to the
/// chunk itself in vector space.
pub struct HashFallbackEmbedder {
    dimensions: usize,
}

impl HashFallbackEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Expand the blake3 digest of `text` into `dimensions` floats in [-1, 1).
    fn digest_vector(&self, text: &str) -> Vec<f32> {
        let mut reader = blake3::Hasher::new().update(text.as_bytes()).finalize_xof();
        let mut bytes = vec![0u8; self.dimensions];
        reader.fill(&mut bytes);
        bytes
            .iter()
            .map(|b| (*b as f32 - 128.0) / 128.0)
            .collect()
    }

    /// The text views blended into one vector: the full text plus leading
    /// and trailing windows when the text is long enough to have distinct ones.
    fn views(text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut views = vec![text.to_string()];
        if words.len() > WINDOW_WORDS {
            views.push(words[..WINDOW_WORDS].join(" "));
            views.push(words[words.len() - WINDOW_WORDS..].join(" "));
        }
        views
    }

    fn project(&self, text: &str) -> Vec<f32> {
        let views = Self::views(text);
        let mut acc = vec![0.0f32; self.dimensions];
        for view in &views {
            for (a, v) in acc.iter_mut().zip(self.digest_vector(view)) {
                *a += v;
            }
        }
        let n = views.len() as f32;
        for a in &mut acc {
            *a /= n;
        }

        // L2 normalize for cosine comparison.
        let norm: f32 = acc.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for a in &mut acc {
                *a /= norm;
            }
        }

        acc
    }
}

impl IEmbeddingProvider for HashFallbackEmbedder {
    fn embed(&self, text: &str) -> TesseraResult<Vec<f32>> {
        Ok(self.project(text))
    }

    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.project(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hash-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}
