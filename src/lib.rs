//! Portfolio Site
//!
//! Single-page personal portfolio: navigable page sections, and project
//! details shown in a modal overlay or a dedicated in-page panel.
//!
//! - `catalog/`: immutable project records (built-in JSON, validated)
//! - `router`: which page section is visible
//! - `render/`: overlay and panel markup
//! - `view`: view controller owning the page state and the entry points
//! - `config`: environment configuration
//! - `api_server` + `web/`: axum/htmx surface (feature `server`)
//! - `export`: static HTML export (feature `server`)

pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod router;
pub mod view;

#[cfg(feature = "server")]
pub mod api_server;
#[cfg(feature = "server")]
pub mod export;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use catalog::{ContentCatalog, DetailSection, DisplayPath, ProjectRecord, ProjectVariant};
pub use config::SiteConfig;
pub use error::{CatalogError, ViewError};
pub use render::ProjectRenderer;
pub use router::SectionRouter;
pub use view::{Transition, ViewController};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "server")]
pub use export::{export_site, ExportReport};
