//! Project Renderer
//!
//! Turns catalog records into markup for the two display paths:
//! - overlay: modal body for simple records
//! - panel: full in-page layout for the rich record
//!
//! Record text is trusted build-time content and is interpolated as-is,
//! except achievement bullets which pass through inline Markdown.

pub mod markup;
pub mod overlay;
pub mod panel;

pub use overlay::{overlay_shell, OverlayFormatter};
pub use panel::PanelFormatter;

use crate::catalog::ProjectRecord;

/// Image shown when a record has none.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder-image-url.jpg";

#[derive(Debug, Clone)]
pub struct ProjectRenderer {
    placeholder_image: String,
}

impl ProjectRenderer {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    pub fn render_overlay(&self, record: &ProjectRecord) -> String {
        OverlayFormatter::format(record, &self.placeholder_image)
    }

    /// `None` when the record is not the rich variant.
    pub fn render_panel(&self, record: &ProjectRecord) -> Option<String> {
        PanelFormatter::format(record, &self.placeholder_image)
    }
}

impl Default for ProjectRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}
