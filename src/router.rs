//! Section Router
//!
//! Tracks which top-level page section is visible. At most one section is
//! active at a time; showing a section deactivates every other one and
//! resets the scroll offset. A name that resolves to no known section
//! leaves the current state untouched.

use rustc_hash::FxHashMap;

use crate::error::ViewError;

/// Section name shown on first load.
pub const DEFAULT_SECTION: &str = "home";

/// Name routed to the dedicated project panel.
pub const PANEL_SECTION_NAME: &str = "pet-project";

/// Element id of the dedicated project panel.
pub const PANEL_SECTION_ID: &str = "pet-project-section";

/// Sections present in the page shell, in document order.
pub const DEFAULT_SECTIONS: &[&str] = &["home", "about", "projects", "skills", "contact", PANEL_SECTION_NAME];

/// Map a section name to its element id.
///
/// `pet-project` maps to the fixed panel id; every other name gets the
/// `-section` suffix.
pub fn section_id_for(name: &str) -> String {
    if name == PANEL_SECTION_NAME {
        PANEL_SECTION_ID.to_string()
    } else {
        format!("{}-section", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub id: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRouter {
    sections: Vec<Section>,
    index: FxHashMap<String, usize>,
    scroll_top: u32,
}

impl SectionRouter {
    /// Router over the given section names, nothing active yet.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections = Vec::new();
        let mut index = FxHashMap::default();

        for name in names {
            let name = name.into();
            let id = section_id_for(&name);
            if index.contains_key(&id) {
                continue;
            }
            index.insert(id.clone(), sections.len());
            sections.push(Section { name, id, active: false });
        }

        Self { sections, index, scroll_top: 0 }
    }

    /// Router over [`DEFAULT_SECTIONS`], nothing active yet.
    pub fn with_default_sections() -> Self {
        Self::new(DEFAULT_SECTIONS.iter().copied())
    }

    /// Activate the section `name` resolves to and return its id.
    pub fn show(&mut self, name: &str) -> Result<&str, ViewError> {
        let id = section_id_for(name);
        let Some(&target) = self.index.get(&id) else {
            return Err(ViewError::UnknownSection(id));
        };

        for section in &mut self.sections {
            section.active = false;
        }
        self.sections[target].active = true;
        self.scroll_top = 0;

        Ok(&self.sections[target].id)
    }

    /// Id of the active section, if any.
    pub fn active(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.active)
            .map(|s| s.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.index
            .get(id)
            .map(|&i| self.sections[i].active)
            .unwrap_or(false)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Record a user scroll; reset again by the next successful `show`.
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_top = offset;
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::with_default_sections()
    }
}
