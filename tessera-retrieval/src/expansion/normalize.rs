//! Query normalization: lowercase, strip punctuation, collapse whitespace.

use std::sync::OnceLock;

use regex::Regex;

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static pattern"))
}

/// Normalize a raw query: lowercase, replace non-word characters with
/// spaces, collapse runs of whitespace.
pub fn normalize(query: &str) -> String {
    let lowered = query.to_lowercase();
    let stripped = non_word().replace_all(&lowered, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
