//! View Controller
//!
//! Owns the page view state and exposes the four user-facing entry points:
//! - `show_section(name)`
//! - `open_project_modal(id)`
//! - `close_project_modal()`
//! - `show_project_page(id)`
//!
//! Every entry point runs to completion and either applies its whole
//! transition or leaves the state untouched. Misses come back as
//! [`ViewError`]; the page surface treats them as no-ops.

use std::sync::Arc;

use crate::catalog::ContentCatalog;
use crate::error::ViewError;
use crate::render::{overlay_shell, ProjectRenderer};
use crate::router::{SectionRouter, DEFAULT_SECTION, PANEL_SECTION_NAME};

/// Modal overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub visible: bool,
    pub content: String,
}

/// Result of a successful entry point call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    SectionShown(String),
    OverlayOpened(u32),
    OverlayClosed,
    PanelShown(u32),
    /// Panel requested for a simple record; the overlay was opened instead.
    FellBackToOverlay(u32),
}

/// Comparable copy of everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub router: SectionRouter,
    pub overlay: Overlay,
    pub modal_open: bool,
    pub panel_content: String,
}

#[derive(Debug, Clone)]
pub struct ViewController {
    catalog: Arc<ContentCatalog>,
    renderer: ProjectRenderer,
    router: SectionRouter,
    overlay: Overlay,
    modal_open: bool,
    panel_content: String,
}

impl ViewController {
    /// Controller over the default page sections, with `home` shown.
    pub fn new(catalog: Arc<ContentCatalog>, renderer: ProjectRenderer) -> Self {
        Self::with_router(catalog, renderer, SectionRouter::with_default_sections())
    }

    /// Controller over a custom section set. Runs the initial
    /// `show_section("home")` like a fresh page load.
    pub fn with_router(
        catalog: Arc<ContentCatalog>,
        renderer: ProjectRenderer,
        router: SectionRouter,
    ) -> Self {
        let mut controller = Self {
            catalog,
            renderer,
            router,
            overlay: Overlay::default(),
            modal_open: false,
            panel_content: String::new(),
        };

        if let Err(e) = controller.show_section(DEFAULT_SECTION) {
            tracing::warn!("Initial section unavailable: {}", e);
        }
        controller
    }

    pub fn show_section(&mut self, name: &str) -> Result<Transition, ViewError> {
        let id = self.router.show(name)?.to_string();
        tracing::debug!("Section shown: {}", id);
        Ok(Transition::SectionShown(id))
    }

    pub fn open_project_modal(&mut self, id: u32) -> Result<Transition, ViewError> {
        let record = self.catalog.get(id)?;
        let content = self.renderer.render_overlay(record);

        self.overlay = Overlay {
            visible: true,
            content,
        };
        self.modal_open = true;

        tracing::debug!("Overlay opened for project {}", id);
        Ok(Transition::OverlayOpened(id))
    }

    pub fn close_project_modal(&mut self) -> Transition {
        self.overlay = Overlay::default();
        self.modal_open = false;
        tracing::debug!("Overlay closed");
        Transition::OverlayClosed
    }

    pub fn show_project_page(&mut self, id: u32) -> Result<Transition, ViewError> {
        let record = self.catalog.get(id)?;

        let Some(content) = self.renderer.render_panel(record) else {
            tracing::debug!("Project {} has no panel layout, using overlay", id);
            self.open_project_modal(id)?;
            return Ok(Transition::FellBackToOverlay(id));
        };

        let section = self.router.show(PANEL_SECTION_NAME)?.to_string();
        self.panel_content = content;

        tracing::debug!("Panel shown for project {} in {}", id, section);
        Ok(Transition::PanelShown(id))
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn router(&self) -> &SectionRouter {
        &self.router
    }

    pub fn active_section(&self) -> Option<&str> {
        self.router.active()
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn panel_content(&self) -> &str {
        &self.panel_content
    }

    /// The modal container as currently shown.
    pub fn overlay_markup(&self) -> String {
        overlay_shell(self.overlay.visible, &self.overlay.content)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            router: self.router.clone(),
            overlay: self.overlay.clone(),
            modal_open: self.modal_open,
            panel_content: self.panel_content.clone(),
        }
    }
}
