//! Domain-specific assertion macros for atelier harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* search invariant was violated.

use atelier_core::{Collection, SearchResult};

// ---------------------------------------------------------------------------
// Result shape assertions
// ---------------------------------------------------------------------------

/// Assert the collection names of a `SearchResult`, in order.
///
/// ```rust
/// assert_collection_names!(result, ["Silk Collection"]);
/// ```
#[macro_export]
macro_rules! assert_collection_names {
    ($result:expr, [$($name:expr),* $(,)?]) => {{
        let result: &atelier_core::SearchResult = &$result;
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(
            result.collection_names(),
            expected,
            "collection names differ"
        );
    }};
}

/// Assert that `total_results` equals the number of returned collections.
#[macro_export]
macro_rules! assert_total_counts_collections {
    ($result:expr) => {{
        let result: &atelier_core::SearchResult = &$result;
        if result.total_results != result.collections.len() {
            panic!(
                "assert_total_counts_collections! failed:\n  total_results: {}\n  collections:   {}\n  products:      {}",
                result.total_results,
                result.collections.len(),
                result.products.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Subset / ordering invariants
// ---------------------------------------------------------------------------

/// Every returned collection is in `source`, appears once, and the returned
/// order is a subsequence of the source order.
pub fn assert_ordered_subset(returned: &[Collection], source: &[Collection]) {
    let mut cursor = 0;
    for collection in returned {
        match source[cursor..].iter().position(|c| c == collection) {
            Some(offset) => cursor += offset + 1,
            None => panic!(
                "collection {:?} is out of order, duplicated, or not in the catalog.\n  returned: {:?}",
                collection.id,
                returned.iter().map(|c| &c.id).collect::<Vec<_>>()
            ),
        }
    }
}

/// Two results are identical in every field.
pub fn assert_same_result(a: &SearchResult, b: &SearchResult) {
    pretty_assertions::assert_eq!(a, b, "search results differ");
}
