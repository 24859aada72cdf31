//! Test builders — ergonomic constructors for collections, products, orders
//! and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use atelier_core::sales::{Order, OrderStatus};
use atelier_core::{Collection, InMemoryCatalog, Product};
use chrono::TimeZone;

// ---------------------------------------------------------------------------
// CollectionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Collection`] fixtures.
///
/// # Example
///
/// ```rust
/// let silk = CollectionBuilder::new("Silk Collection")
///     .image("silk/01.jpg")
///     .price(120.0)
///     .build();
/// ```
pub struct CollectionBuilder {
    id: String,
    name: String,
    image_refs: Vec<String>,
    price: f64,
}

impl CollectionBuilder {
    /// The id defaults to the name, slugified.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase().replace(' ', "-"),
            name,
            image_refs: Vec::new(),
            price: 0.0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_refs.push(image_ref.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn build(self) -> Collection {
        Collection {
            id: self.id,
            name: self.name,
            image_refs: self.image_refs,
            price: self.price,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Collections named `names`, ids `c0`, `c1`, ….
pub fn collections(names: &[&str]) -> Vec<Collection> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| CollectionBuilder::new(*name).id(format!("c{i}")).build())
        .collect()
}

pub fn product(id: &str, name: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: 49.0,
        images: Vec::new(),
        description: None,
    }
}

/// An order placed at noon UTC on the given day.
pub fn order(id: &str, ymd: (i32, u32, u32), total: f64, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        placed_at: chrono::Utc
            .with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0)
            .single()
            .expect("valid test date"),
        total,
        status,
    }
}

pub fn paid(id: &str, ymd: (i32, u32, u32), total: f64) -> Order {
    order(id, ymd, total, OrderStatus::Paid)
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// In-memory catalog over the named collections and the given products.
pub fn catalog(names: &[&str], products: Vec<Product>) -> InMemoryCatalog {
    InMemoryCatalog::new(collections(names), products)
}
