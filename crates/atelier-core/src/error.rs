//! Error types for the catalog boundary and the search service.
//!
//! Normalization, matching, suggestions and sales aggregation are total and
//! never fail. The only failure in the search path comes from the catalog
//! source, and it is surfaced to the caller untouched.

use std::path::PathBuf;
use thiserror::Error;

/// A catalog source could not deliver its data.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a search call.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    CatalogUnavailable(#[from] CatalogError),
}
