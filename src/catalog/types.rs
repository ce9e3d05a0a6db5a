//! Shared data types for the project catalog.
//!
//! Records are loaded from JSON (`data/projects.json` by default). The
//! `kind` field is the explicit variant discriminant:
//! - `simple`: carries `features`, shown in the modal overlay
//! - `rich`: carries `sections`, shown in the dedicated project panel

use serde::{Deserialize, Serialize};

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub overview: String,
    pub technologies: Vec<String>,
    /// Preformatted source text, may be partial
    pub code_snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub variant: ProjectVariant,
}

/// Variant-specific content of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectVariant {
    Simple { features: Vec<String> },
    Rich { sections: Vec<DetailSection> },
}

/// Heading + icon + bullet list block of a rich record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailSection {
    pub heading: String,
    /// Icon class list, e.g. `fas fa-brain`
    pub icon: String,
    pub details: Vec<String>,
}

/// Where a record is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPath {
    Overlay,
    Panel,
}

impl ProjectRecord {
    pub fn is_rich(&self) -> bool {
        matches!(self.variant, ProjectVariant::Rich { .. })
    }

    /// The rendering path a caller should use for this record.
    pub fn display_path(&self) -> DisplayPath {
        match self.variant {
            ProjectVariant::Simple { .. } => DisplayPath::Overlay,
            ProjectVariant::Rich { .. } => DisplayPath::Panel,
        }
    }

    /// Image locator, or `placeholder` when the record has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(placeholder)
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            title: self.title.clone(),
            date: self.date.clone(),
            path: self.display_path(),
        }
    }
}

/// Card-level view of a record for the project listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub path: DisplayPath,
}

impl ProjectSummary {
    pub fn is_panel(&self) -> bool {
        self.path == DisplayPath::Panel
    }
}
