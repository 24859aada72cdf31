//! Static storefront corpora used across harnesses.

use atelier_core::Product;

/// The gallery as it appears on the storefront home page.
pub const GALLERY: &[&str] = &[
    "Collection 1",
    "Silk Collection",
    "Ethnic Saree Set",
    "Traditional Kurta Set",
    "Summer Linen Edit",
    "Evening Gowns",
    "Denim Days",
    "Wool Coat Capsule",
    "Bridal Lehenga Studio",
    "Floral Maxi Dress",
];

/// The minimal three-collection gallery from the silk scenario.
pub const SILK_SCENARIO: &[&str] = &["Collection 1", "Silk Collection", "Ethnic Saree Set"];

/// Queries spanning direct hits, synonym hits, and misses.
pub const QUERIES: &[&str] = &[
    "silk", "ethnic", "dress", "winter", "party", "bridal", "casual", "summer", "collection",
    "nothing-here", "SILK", "  Ethnic  ",
];

pub fn products() -> Vec<Product> {
    vec![
        super::product("p1", "Banarasi Silk Saree", "ethnic"),
        super::product("p2", "Linen Shirt", "casual"),
        super::product("p3", "Sequin Party Dress", "party"),
        super::product("p4", "Merino Wool Scarf", "winter"),
    ]
}

/// A small catalog file covering collections, products and orders.
pub const CATALOG_JSON: &str = r#"{
  "collections": [
    { "id": "silk", "name": "Silk Collection", "imageRefs": ["silk/01.jpg", "silk/02.jpg"], "price": 120 },
    { "id": "kurta", "name": "Traditional Kurta Set", "imageRefs": ["kurta/01.jpg"], "price": 80 }
  ],
  "products": [
    { "id": "p1", "name": "Silk Scarf", "category": "accessories", "price": 30 }
  ],
  "orders": [
    { "id": "o1", "placedAt": "2024-01-05T09:00:00Z", "total": 120.0, "status": "paid" },
    { "id": "o2", "placedAt": "2024-01-20T18:30:00Z", "total": 80.0, "status": "delivered" },
    { "id": "o3", "placedAt": "2024-03-11T11:00:00Z", "total": 45.5, "status": "cancelled" },
    { "id": "o4", "placedAt": "2024-03-12T11:00:00Z", "total": 60.0, "status": "shipped" }
  ]
}"#;
