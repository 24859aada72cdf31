//! atelier-catalog — catalog source loaders for atelier.
//!
//! Each loader reads catalog data from disk and hands back plain
//! [`atelier_core`] records. Combine them into an
//! [`atelier_core::InMemoryCatalog`] for the search service.

pub mod file;
pub mod folders;

pub use file::{load_catalog_file, CatalogFile};
pub use folders::load_image_folders;
