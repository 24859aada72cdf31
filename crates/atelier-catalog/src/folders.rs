//! Image-folder collections.
//!
//! Every sub-directory of the gallery root is one collection:
//!
//! - `id` is the directory name;
//! - `name` is the directory name title-cased, with `-` and `_` read as
//!   spaces, unless `collection.json` in the folder sets `name`;
//! - `image_refs` are the image files in the folder as `dir/file`, sorted;
//! - `price` comes from `collection.json`, else 0.
//!
//! Collections are returned sorted by id. Loose files in the root and
//! dot-directories (`.thumbnails`) are ignored. Symlinks are followed; a
//! dangling link is skipped.

use atelier_core::{CatalogError, Collection};
use serde::Deserialize;
use std::fs::Metadata;
use std::path::Path;
use tokio::fs::DirEntry;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];
const META_FILE: &str = "collection.json";

#[derive(Debug, Default, Deserialize)]
struct FolderMeta {
    name: Option<String>,
    price: Option<f64>,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Metadata of the entry's target, following symlinks. `None` for a
/// dangling link.
async fn target_metadata(entry: &DirEntry) -> Result<Option<Metadata>, CatalogError> {
    let path = entry.path();
    match tokio::fs::metadata(&path).await {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "catalog: skipping dangling link");
            Ok(None)
        }
        Err(source) => Err(CatalogError::Io { path, source }),
    }
}

fn is_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// `"silk-sarees_2024"` → `"Silk Sarees 2024"`.
pub fn title_case(dir_name: &str) -> String {
    dir_name
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

async fn read_meta(dir: &Path) -> Result<FolderMeta, CatalogError> {
    let path = dir.join(META_FILE);
    match tokio::fs::read_to_string(&path).await {
        Ok(raw) => serde_json::from_str(&raw).map_err(|source| CatalogError::Parse { path, source }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FolderMeta::default()),
        Err(source) => Err(CatalogError::Io { path, source }),
    }
}

async fn load_folder(dir: &Path, id: String) -> Result<Collection, CatalogError> {
    let mut image_refs = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error(dir))?;
    while let Some(entry) = entries.next_entry().await.map_err(io_error(dir))? {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_image(&file_name) {
            continue;
        }
        if target_metadata(&entry).await?.is_some_and(|meta| meta.is_file()) {
            image_refs.push(format!("{id}/{file_name}"));
        }
    }
    image_refs.sort();

    let meta = read_meta(dir).await?;
    Ok(Collection {
        name: meta.name.unwrap_or_else(|| title_case(&id)),
        price: meta.price.unwrap_or(0.0),
        image_refs,
        id,
    })
}

/// Build one collection per sub-directory of `root`.
pub async fn load_image_folders(root: &Path) -> Result<Vec<Collection>, CatalogError> {
    let mut collections = Vec::new();
    let mut entries = tokio::fs::read_dir(root).await.map_err(io_error(root))?;
    while let Some(entry) = entries.next_entry().await.map_err(io_error(root))? {
        let id = entry.file_name().to_string_lossy().into_owned();
        if id.starts_with('.') {
            continue;
        }
        if !target_metadata(&entry).await?.is_some_and(|meta| meta.is_dir()) {
            continue;
        }
        collections.push(load_folder(&entry.path(), id).await?);
    }
    collections.sort_by(|a, b| a.id.cmp(&b.id));

    tracing::info!(
        root = %root.display(),
        collections = collections.len(),
        images = collections.iter().map(|c| c.image_refs.len()).sum::<usize>(),
        "catalog: loaded image folders"
    );
    Ok(collections)
}
