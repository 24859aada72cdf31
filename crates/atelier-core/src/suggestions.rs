//! Suggestion generator — canned search phrases for the search box.
//!
//! Suggestions come from a fixed table, never from the catalog.
//!
//! - Blank input (after trimming) gets the first `limit` phrases.
//! - Otherwise the input is lowercased, *not* re-trimmed, and the table is
//!   filtered by substring containment, truncated to `limit`.
//! - If nothing survives the filter, the first `fallback_limit` phrases are
//!   returned instead. The fallback is deliberately shorter than `limit`.

/// Canonical suggestion phrases, in display order. All lowercase.
pub const CANONICAL_SUGGESTIONS: &[&str] = &[
    "summer dresses",
    "ethnic wear",
    "silk sarees",
    "party wear",
    "casual tops",
    "bridal lehengas",
    "cotton kurtas",
    "evening gowns",
    "winter collection",
    "denim jackets",
];

pub const DEFAULT_LIMIT: usize = 6;
pub const DEFAULT_FALLBACK_LIMIT: usize = 4;

/// Suggestion generator over [`CANONICAL_SUGGESTIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggester {
    limit: usize,
    fallback_limit: usize,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_FALLBACK_LIMIT)
    }
}

impl Suggester {
    pub fn new(limit: usize, fallback_limit: usize) -> Self {
        Self {
            limit,
            fallback_limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn fallback_limit(&self) -> usize {
        self.fallback_limit
    }

    pub fn suggest(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return self.head(self.limit);
        }

        let needle = query.to_lowercase();
        let matches: Vec<String> = CANONICAL_SUGGESTIONS
            .iter()
            .filter(|phrase| phrase.contains(needle.as_str()))
            .take(self.limit)
            .map(|phrase| phrase.to_string())
            .collect();

        if matches.is_empty() {
            tracing::debug!(query, "suggestions: no match, using fallback");
            return self.head(self.fallback_limit);
        }
        matches
    }

    fn head(&self, n: usize) -> Vec<String> {
        CANONICAL_SUGGESTIONS.iter().take(n).map(|s| s.to_string()).collect()
    }
}

/// Suggestions with the default limits.
pub fn suggest(query: &str) -> Vec<String> {
    Suggester::default().suggest(query)
}
