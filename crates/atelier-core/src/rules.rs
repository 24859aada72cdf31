//! Category expansion table.
//!
//! Each [`SynonymRule`] links user-facing search terms to the category
//! substrings expected in matching collection names. The table is plain data
//! iterated in order; adding a synonym never touches the matcher.
//!
//! # Semantics
//!
//! A rule is *triggered* when the normalized query contains any of its
//! `terms`. A triggered rule *covers* a collection when the collection's
//! lowercased name contains any of its `categories`. Several rules covering
//! the same collection still include it once.
//!
//! Because triggering is by substring, a term must not occur inside an
//! unrelated fashion word ("desi" in "designer", "cold" in "cold-shoulder").

use phf::{phf_ordered_set, OrderedSet};

/// One static association of search terms to category substrings.
#[derive(Debug)]
pub struct SynonymRule {
    pub terms: OrderedSet<&'static str>,
    pub categories: OrderedSet<&'static str>,
}

impl SynonymRule {
    /// True when `query` contains any of this rule's terms.
    pub fn triggered_by(&self, query: &str) -> bool {
        self.terms.iter().any(|term| query.contains(term))
    }

    /// True when the lowercased `name` contains any of this rule's categories.
    pub fn covers(&self, name: &str) -> bool {
        self.categories.iter().any(|category| name.contains(category))
    }
}

/// The built-in rule table. Order matters: the first covering rule is the one
/// reported as the match reason.
pub static CATEGORY_RULES: [SynonymRule; 8] = [
    SynonymRule {
        terms: phf_ordered_set! { "ethnic", "traditional", "indian" },
        categories: phf_ordered_set! { "saree", "kurta", "ethnic", "traditional", "lehenga" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "dress", "gown", "frock" },
        categories: phf_ordered_set! { "dress", "gown", "frock", "maxi" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "silk", "satin", "luxury" },
        categories: phf_ordered_set! { "silk", "satin", "chiffon" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "casual", "everyday", "comfort" },
        categories: phf_ordered_set! { "casual", "cotton", "denim" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "party", "evening", "festive" },
        categories: phf_ordered_set! { "party", "evening", "sequin", "festive" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "summer", "beach", "vacation" },
        categories: phf_ordered_set! { "summer", "linen", "floral", "resort" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "winter", "warm", "woollen" },
        categories: phf_ordered_set! { "winter", "wool", "knit", "coat" },
    },
    SynonymRule {
        terms: phf_ordered_set! { "wedding", "bridal", "bride" },
        categories: phf_ordered_set! { "bridal", "wedding", "lehenga" },
    },
];

/// The built-in table as a slice, for passing to the matcher.
pub fn default_rules() -> &'static [SynonymRule] {
    &CATEGORY_RULES
}
