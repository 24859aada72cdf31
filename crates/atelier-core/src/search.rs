//! Search layer — the capability exposed to the storefront UI.
//!
//! [`SearchService::perform_search`] normalizes the query, pulls collections
//! from the catalog source, runs the [matcher](crate::matcher), and composes
//! the [`SearchResult`]. Products always come from the catalog: all of them
//! for an empty query, the catalog's own search otherwise.
//!
//! Catalog failures propagate as [`SearchError::CatalogUnavailable`]. There is
//! no retry and no fallback to an empty product list.

use crate::catalog::CatalogSource;
use crate::error::SearchError;
use crate::matcher::match_collections;
use crate::normalizer::{normalize, NormalizedQuery};
use crate::rules::{default_rules, SynonymRule};
use crate::suggestions::Suggester;
use crate::types::{Collection, Product, SearchResult};

/// Compose a result envelope. `total_results` counts matched collections only.
pub fn aggregate(
    query: &NormalizedQuery,
    collections: &[Collection],
    products: Vec<Product>,
    rules: &[SynonymRule],
) -> SearchResult {
    let collections = match_collections(query, collections, rules);
    SearchResult {
        total_results: collections.len(),
        collections,
        products,
    }
}

/// Search and suggestions bound to one catalog source.
pub struct SearchService<C> {
    catalog: C,
    rules: &'static [SynonymRule],
    suggester: Suggester,
}

impl<C: CatalogSource> SearchService<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            rules: default_rules(),
            suggester: Suggester::default(),
        }
    }

    pub fn with_rules(mut self, rules: &'static [SynonymRule]) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_suggester(mut self, suggester: Suggester) -> Self {
        self.suggester = suggester;
        self
    }

    pub fn perform_search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let query = normalize(query);
        let collections = self.catalog.all_collections()?;
        let products = if query.is_empty() {
            self.catalog.all_products()?
        } else {
            self.catalog.search_products(query.as_str())?
        };

        let result = aggregate(&query, &collections, products, self.rules);
        tracing::debug!(
            query = %query,
            scanned = collections.len(),
            collections = result.collections.len(),
            products = result.products.len(),
            "search: done"
        );
        Ok(result)
    }

    pub fn get_search_suggestions(&self, query: &str) -> Vec<String> {
        self.suggester.suggest(query)
    }
}
