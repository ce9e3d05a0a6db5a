use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no records")]
    Empty,

    #[error("project id must be positive")]
    ZeroId,

    #[error("duplicate project id {0}")]
    DuplicateId(u32),

    #[error("project {id}: `{field}` must not be empty")]
    EmptyField { id: u32, field: &'static str },

    #[error("project {0}: rich records require an image")]
    MissingImage(u32),
}

/// Misses reported by the view controller.
///
/// The page-facing surface absorbs both as no-ops; they exist so callers
/// can log or report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("project {0} not found")]
    RecordNotFound(u32),

    #[error("no section with id `{0}`")]
    UnknownSection(String),
}
