//! Configuration types for atelier.
//!
//! [`Config::load`] reads `~/.config/atelier/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).

use crate::suggestions::{Suggester, DEFAULT_FALLBACK_LIMIT, DEFAULT_LIMIT};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
suggestion_limit = 6
fallback_limit   = 4

[catalog]
# path   = "/srv/atelier/catalog.json"
# images = "/srv/atelier/gallery"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default = "default_fallback_limit")]
    pub fallback_limit: usize,
}

fn default_suggestion_limit() -> usize { DEFAULT_LIMIT }
fn default_fallback_limit() -> usize { DEFAULT_FALLBACK_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            fallback_limit: default_fallback_limit(),
        }
    }
}

/// `[catalog]` section of `config.toml`. Both entries are optional; the CLI
/// flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file with collections, products and orders.
    pub path: Option<PathBuf>,
    /// Gallery root whose sub-directories become collections.
    pub images: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/atelier/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file on top of the defaults. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Suggestion generator with the configured limits.
    pub fn suggester(&self) -> Suggester {
        Suggester::new(self.search.suggestion_limit, self.search.fallback_limit)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("atelier")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
