//! Catalog — the read-only source of collections and products.
//!
//! The search layer only sees the [`CatalogSource`] trait. [`InMemoryCatalog`]
//! is the in-process implementation that file loaders in `atelier-catalog`
//! produce and that tests build directly.

use crate::error::CatalogError;
use crate::types::{Collection, Product};

/// Trait implemented by every catalog provider.
///
/// Each call is total on success: a provider never returns partial data. Any
/// failure is reported as a [`CatalogError`] and not retried by the caller.
pub trait CatalogSource: Send + Sync {
    /// Every collection, in the provider's canonical order.
    fn all_collections(&self) -> Result<Vec<Collection>, CatalogError>;

    /// Every product, in the provider's canonical order.
    fn all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// The provider's own product search for an already-normalized query.
    fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError>;
}

impl<C: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<C> {
    fn all_collections(&self) -> Result<Vec<Collection>, CatalogError> {
        (**self).all_collections()
    }

    fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).all_products()
    }

    fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        (**self).search_products(query)
    }
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryCatalog {
    collections: Vec<Collection>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(collections: Vec<Collection>, products: Vec<Product>) -> Self {
        Self {
            collections,
            products,
        }
    }

    /// Add collections after the existing ones (e.g. image folders loaded
    /// from disk after the catalog file). `id` is the identity: an incoming
    /// collection whose id is already present is folded into it, contributing
    /// only image refs it does not have yet, and keeping the existing name and
    /// price. Returns how many incoming collections were folded.
    pub fn merge_collections(&mut self, collections: impl IntoIterator<Item = Collection>) -> usize {
        let mut merged = 0;
        for incoming in collections {
            match self.collections.iter_mut().find(|c| c.id == incoming.id) {
                Some(existing) => {
                    for image in incoming.image_refs {
                        if !existing.image_refs.contains(&image) {
                            existing.image_refs.push(image);
                        }
                    }
                    merged += 1;
                }
                None => self.collections.push(incoming),
            }
        }
        merged
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogSource for InMemoryCatalog {
    fn all_collections(&self) -> Result<Vec<Collection>, CatalogError> {
        Ok(self.collections.clone())
    }

    fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    /// Substring search over name, category and description, case-insensitive.
    fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let query = query.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .cloned()
            .collect())
    }
}
