//! Project Catalog
//!
//! Immutable id -> record table, built once at startup and shared behind
//! `Arc`. The built-in records live in `data/projects.json` and are embedded
//! at compile time; `CATALOG_PATH` can point at a replacement file.
//!
//! Loading validates every record:
//! - ids are positive and unique
//! - title, date, overview and technologies are non-empty
//! - rich records carry an image

pub mod types;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CatalogError, ViewError};

pub use types::{DetailSection, DisplayPath, ProjectRecord, ProjectSummary, ProjectVariant};

const BUILTIN_CATALOG: &str = include_str!("../../data/projects.json");

#[derive(Debug, Clone)]
pub struct ContentCatalog {
    records: BTreeMap<u32, ProjectRecord>,
}

impl ContentCatalog {
    /// The five portfolio records shipped with the site.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut map = BTreeMap::new();
        for record in records {
            validate(&record)?;
            let id = record.id;
            if map.insert(id, record).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        tracing::debug!("Catalog built with {} records", map.len());
        Ok(Self { records: map })
    }

    /// Pure read; `None` when the id is unknown.
    pub fn lookup(&self, id: u32) -> Option<&ProjectRecord> {
        self.records.get(&id)
    }

    /// Like [`lookup`](Self::lookup) but with the miss as an error.
    pub fn get(&self, id: u32) -> Result<&ProjectRecord, ViewError> {
        self.lookup(id).ok_or(ViewError::RecordNotFound(id))
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.values()
    }

    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.iter().map(ProjectRecord::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(record: &ProjectRecord) -> Result<(), CatalogError> {
    let id = record.id;
    if id == 0 {
        return Err(CatalogError::ZeroId);
    }

    let required = [
        ("title", record.title.trim().is_empty()),
        ("date", record.date.trim().is_empty()),
        ("overview", record.overview.trim().is_empty()),
        ("technologies", record.technologies.is_empty()),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, empty)| *empty) {
        return Err(CatalogError::EmptyField { id, field });
    }

    if record.is_rich() && record.image.is_none() {
        return Err(CatalogError::MissingImage(id));
    }

    Ok(())
}
