//! FakeCatalog — a [`CatalogSource`] whose calls can be made to fail and
//! whose call counts can be inspected.
//!
//! Used to verify that the search layer propagates catalog failures and
//! only calls product search for non-empty queries.

use atelier_core::{CatalogError, CatalogSource, Collection, InMemoryCatalog, Product};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Which catalog call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Collections,
    AllProducts,
    ProductSearch,
}

pub struct FakeCatalog {
    inner: InMemoryCatalog,
    fail_on: FailOn,
    product_searches: AtomicUsize,
    product_listings: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(inner: InMemoryCatalog) -> Self {
        Self {
            inner,
            fail_on: FailOn::Nothing,
            product_searches: AtomicUsize::new(0),
            product_listings: AtomicUsize::new(0),
        }
    }

    pub fn failing(mut self, fail_on: FailOn) -> Self {
        self.fail_on = fail_on;
        self
    }

    pub fn product_searches(&self) -> usize {
        self.product_searches.load(Ordering::SeqCst)
    }

    pub fn product_listings(&self) -> usize {
        self.product_listings.load(Ordering::SeqCst)
    }

    fn check(&self, call: FailOn) -> Result<(), CatalogError> {
        if self.fail_on == call {
            Err(CatalogError::Unavailable(format!("{call:?} is down")))
        } else {
            Ok(())
        }
    }
}

impl CatalogSource for FakeCatalog {
    fn all_collections(&self) -> Result<Vec<Collection>, CatalogError> {
        self.check(FailOn::Collections)?;
        self.inner.all_collections()
    }

    fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.product_listings.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::AllProducts)?;
        self.inner.all_products()
    }

    fn search_products(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        self.product_searches.fetch_add(1, Ordering::SeqCst);
        self.check(FailOn::ProductSearch)?;
        self.inner.search_products(query)
    }
}
