//! atelier — storefront search front-end.
//!
//! The binary is a thin clap shell over the functions here so that the
//! integration harnesses can drive each subcommand without spawning a
//! process.
//!
//! # Architecture
//!
//! ```text
//! catalog.json ─┐
//!               ├──► InMemoryCatalog ──► SearchService ──► search / suggest
//! gallery/ ─────┘
//! catalog.json ──► orders ──► sales aggregation ──► sales
//! ```

use anyhow::Context;
use atelier_catalog::{load_catalog_file, load_image_folders, CatalogFile};
use atelier_core::preload::PreloadGuard;
use atelier_core::sales::{aggregate_monthly, total_revenue, yearly_series, Order};
use atelier_core::{CatalogSource, InMemoryCatalog, SearchService, Suggester};
use std::fmt::Write as _;
use std::path::Path;

/// Load the catalog file and/or gallery folders. Folder collections are
/// appended after the file's collections; a folder whose name matches a file
/// collection's id adds its images to that collection instead.
pub async fn load_sources(
    catalog: Option<&Path>,
    images: Option<&Path>,
) -> anyhow::Result<(InMemoryCatalog, Vec<Order>)> {
    if catalog.is_none() && images.is_none() {
        anyhow::bail!("no catalog given: pass --catalog/--images or set [catalog] in config");
    }

    let file = match catalog {
        Some(path) => load_catalog_file(path)
            .await
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => CatalogFile::default(),
    };
    let (mut store, orders) = file.into_parts();

    if let Some(root) = images {
        let folders = load_image_folders(root)
            .await
            .with_context(|| format!("loading image folders under {}", root.display()))?;
        let merged = store.merge_collections(folders);
        if merged > 0 {
            tracing::debug!(merged, "catalog: folded image folders into file collections");
        }
    }
    Ok((store, orders))
}

/// Run a search and render the result as pretty JSON. With `preload`, the
/// matched collections' images are de-duplicated and logged for preloading.
pub fn search<C: CatalogSource>(
    service: &SearchService<C>,
    query: &str,
    preload: bool,
) -> anyhow::Result<String> {
    let result = service.perform_search(query)?;

    if preload {
        let mut guard = PreloadGuard::new();
        let refs = guard.schedule(
            result
                .collections
                .iter()
                .flat_map(|c| c.image_refs.iter()),
        );
        tracing::info!(count = refs.len(), refs = ?refs, "preload: scheduled images");
    }

    Ok(serde_json::to_string_pretty(&result)?)
}

/// One suggestion per line.
pub fn suggest(suggester: &Suggester, query: &str) -> String {
    suggester.suggest(query).join("\n")
}

/// Monthly revenue table. With `year`, all twelve months of that year are
/// listed; otherwise only months that have orders.
pub fn sales(orders: &[Order], year: Option<i32>) -> String {
    let months = match year {
        Some(year) => yearly_series(orders, year),
        None => aggregate_monthly(orders),
    };

    let mut out = String::new();
    for m in &months {
        let _ = writeln!(out, "{:<9} {:>12.2} {:>5} orders", m.label(), m.revenue, m.orders);
    }
    let _ = write!(out, "{:<9} {:>12.2}", "Total", total_revenue(&months));
    out
}
