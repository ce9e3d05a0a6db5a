//! Site configuration from environment variables.
//!
//! | Variable                | Default                      |
//! |-------------------------|------------------------------|
//! | `PORT`                  | 3000                         |
//! | `CATALOG_PATH`          | built-in catalog             |
//! | `STATIC_DIR`            | `static`                     |
//! | `PLACEHOLDER_IMAGE`     | `placeholder-image-url.jpg`  |
//! | `RENDER_CACHE_CAPACITY` | 256                          |
//! | `RENDER_CACHE_TTL_SECS` | 300                          |
//!
//! Numbers that fail to parse fall back to their default.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::ContentCatalog;
use crate::error::CatalogError;
use crate::render::DEFAULT_PLACEHOLDER_IMAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub placeholder_image: String,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            catalog_path: None,
            static_dir: PathBuf::from("static"),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            cache_capacity: 256,
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key -> value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            catalog_path: non_empty("CATALOG_PATH").map(PathBuf::from),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            placeholder_image: non_empty("PLACEHOLDER_IMAGE").unwrap_or(defaults.placeholder_image),
            cache_capacity: non_empty("RENDER_CACHE_CAPACITY")
                .and_then(|c| c.trim().parse().ok())
                .unwrap_or(defaults.cache_capacity),
            cache_ttl: non_empty("RENDER_CACHE_TTL_SECS")
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        }
    }

    /// Built-in catalog, or the file at `catalog_path` when set.
    pub fn load_catalog(&self) -> Result<Arc<ContentCatalog>, CatalogError> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                ContentCatalog::from_path(path)?
            }
            None => ContentCatalog::builtin()?,
        };
        Ok(Arc::new(catalog))
    }
}
