//! Cross-variant deduplication by content fingerprint.

use std::collections::HashSet;

use tessera_core::models::Candidate;

/// Collapse duplicate candidates, keeping the first occurrence of each
/// content fingerprint. Order-preserving and idempotent.
///
/// Content is compared verbatim through the fingerprint; whitespace-only
/// differences survive as distinct candidates.
pub fn dedupe(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.fingerprint()))
        .collect()
}
