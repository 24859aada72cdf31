//! JSON catalog file.
//!
//! ```json
//! {
//!   "collections": [{ "id": "silk", "name": "Silk Collection", "imageRefs": [], "price": 120 }],
//!   "products":    [{ "id": "p1", "name": "Silk Scarf", "category": "accessories", "price": 30 }],
//!   "orders":      [{ "id": "o1", "placedAt": "2024-03-02T10:00:00Z", "total": 30, "status": "paid" }]
//! }
//! ```
//!
//! Every top-level key is optional.

use atelier_core::sales::Order;
use atelier_core::{CatalogError, Collection, InMemoryCatalog, Product};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl CatalogFile {
    /// Split into the searchable catalog and the order list.
    pub fn into_parts(self) -> (InMemoryCatalog, Vec<Order>) {
        (InMemoryCatalog::new(self.collections, self.products), self.orders)
    }

    pub fn into_catalog(self) -> InMemoryCatalog {
        self.into_parts().0
    }
}

/// Read and parse a catalog file.
pub async fn load_catalog_file(path: &Path) -> Result<CatalogFile, CatalogError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let file: CatalogFile = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        collections = file.collections.len(),
        products = file.products.len(),
        orders = file.orders.len(),
        "catalog: loaded file"
    );
    Ok(file)
}
