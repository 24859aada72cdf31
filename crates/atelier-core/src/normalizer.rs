//! Normalizer — turns raw search input into a [`NormalizedQuery`].
//!
//! Every comparison in the search layer runs against the normalized form:
//! lowercase, with leading and trailing whitespace removed.

use std::fmt;

/// Lowercase, trimmed search text. Empty means "browse all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw query. Whitespace-only input yields the empty query.
pub fn normalize(query: &str) -> NormalizedQuery {
    NormalizedQuery(query.to_lowercase().trim().to_string())
}
