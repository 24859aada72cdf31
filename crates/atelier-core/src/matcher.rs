//! Matcher — filters collections against a normalized query.
//!
//! For each collection, in catalog order:
//!
//! 1. **Direct match**: the lowercased name contains the query.
//! 2. **Category match**: some rule triggered by the query covers the name.
//!    The first covering rule in table order wins.
//!
//! An empty query is the "browse all" mode and passes every collection
//! through. The output is a subsequence of the input: never reordered, never
//! duplicated, never anything from outside the input.

use crate::normalizer::NormalizedQuery;
use crate::rules::SynonymRule;
use crate::types::Collection;

/// Why a collection was included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// The name contains the query itself.
    Direct,
    /// The name contains a category of the rule at this table index.
    Category { rule: usize },
}

/// A query bound to the rules it triggers. Built once per search so the
/// trigger check is not repeated for every collection.
struct Matcher<'a> {
    query: &'a str,
    active: Vec<(usize, &'a SynonymRule)>,
}

impl<'a> Matcher<'a> {
    fn new(query: &'a NormalizedQuery, rules: &'a [SynonymRule]) -> Self {
        let active = rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.triggered_by(query.as_str()))
            .collect();
        Self {
            query: query.as_str(),
            active,
        }
    }

    fn reason(&self, collection: &Collection) -> Option<MatchReason> {
        let name = collection.name.to_lowercase();
        if name.contains(self.query) {
            return Some(MatchReason::Direct);
        }
        self.active
            .iter()
            .find(|(_, rule)| rule.covers(&name))
            .map(|(index, _)| MatchReason::Category { rule: *index })
    }
}

/// Explain whether and why `collection` matches `query`.
pub fn match_reason(
    query: &NormalizedQuery,
    collection: &Collection,
    rules: &[SynonymRule],
) -> Option<MatchReason> {
    Matcher::new(query, rules).reason(collection)
}

/// Filter `collections` down to those matching `query`, preserving order.
pub fn match_collections(
    query: &NormalizedQuery,
    collections: &[Collection],
    rules: &[SynonymRule],
) -> Vec<Collection> {
    if query.is_empty() {
        return collections.to_vec();
    }

    let matcher = Matcher::new(query, rules);
    tracing::debug!(
        query = %query,
        active_rules = matcher.active.len(),
        "matcher: rules triggered"
    );

    collections
        .iter()
        .filter(|collection| matcher.reason(collection).is_some())
        .cloned()
        .collect()
}
