//! Core types for atelier-core.
//!
//! This module defines the records shared across the search layers: the
//! gallery [`Collection`], the catalog [`Product`], and the [`SearchResult`]
//! envelope handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// A named grouping of images representing a product line or gallery bucket.
///
/// Identity is `id`. Only `name` takes part in matching; the remaining fields
/// are carried through to the result untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    /// Display name, e.g. "Silk Collection". Matched case-insensitively.
    pub name: String,
    /// Image references in display order.
    #[serde(default)]
    pub image_refs: Vec<String>,
    #[serde(default)]
    pub price: f64,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_refs: Vec::new(),
            price: 0.0,
        }
    }
}

/// A catalog product. Opaque to the search core: products are matched only
/// by the catalog source's own search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The envelope returned by a search.
///
/// `total_results` is the number of matched collections. Products are carried
/// but not counted, even for non-empty queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub collections: Vec<Collection>,
    pub products: Vec<Product>,
    pub total_results: usize,
}

impl SearchResult {
    /// Collection names in result order. Handy for logging and assertions.
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name.as_str()).collect()
    }
}
