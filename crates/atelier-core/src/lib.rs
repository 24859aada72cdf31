//! atelier-core — storefront search core.
//!
//! This crate exposes the search pipeline as public modules, plus the admin
//! sales aggregation and the gallery preload guard.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Normalizer ──► Matcher ──► Aggregator ──► SearchResult
//!                              ▲
//!                   Category rules table
//!
//! Query ──► Suggester ──► suggestions
//! ```
//!
//! Everything here is synchronous and pure apart from the calls into the
//! [`CatalogSource`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod preload;
pub mod rules;
pub mod sales;
pub mod search;
pub mod suggestions;
pub mod types;

pub use catalog::{CatalogSource, InMemoryCatalog};
pub use error::{CatalogError, SearchError};
pub use normalizer::{normalize, NormalizedQuery};
pub use search::SearchService;
pub use suggestions::{suggest, Suggester};
pub use types::{Collection, Product, SearchResult};
