//! Static export: the initial page plus one fragment per project.
//!
//! Output layout:
//!   `<out_dir>/index.html`
//!   `<out_dir>/projects/<id>.html` (overlay body or panel layout)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::catalog::{ContentCatalog, DisplayPath};
use crate::render::ProjectRenderer;
use crate::view::ViewController;
use crate::web::handlers::pages::render_full_page;

/// Files written by [`export_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub index: PathBuf,
    pub fragments: Vec<PathBuf>,
}

pub fn export_site(
    catalog: Arc<ContentCatalog>,
    renderer: &ProjectRenderer,
    out_dir: &Path,
) -> anyhow::Result<ExportReport> {
    let projects_dir = out_dir.join("projects");
    std::fs::create_dir_all(&projects_dir)
        .with_context(|| format!("creating {}", projects_dir.display()))?;

    let index_view = ViewController::new(catalog.clone(), renderer.clone());
    let index = out_dir.join("index.html");
    let html = render_full_page(&index_view).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    std::fs::write(&index, html).with_context(|| format!("writing {}", index.display()))?;
    tracing::info!("Wrote {}", index.display());

    let mut fragments = Vec::with_capacity(catalog.len());
    for record in catalog.iter() {
        let mut view = ViewController::new(catalog.clone(), renderer.clone());
        let fragment = match record.display_path() {
            DisplayPath::Panel => {
                view.show_project_page(record.id)?;
                view.panel_content().to_string()
            }
            DisplayPath::Overlay => {
                view.open_project_modal(record.id)?;
                view.overlay().content.clone()
            }
        };

        let path = projects_dir.join(format!("{}.html", record.id));
        std::fs::write(&path, fragment).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Wrote {} ({:?})", path.display(), record.display_path());
        fragments.push(path);
    }

    tracing::info!("Exported {} projects to {}", fragments.len(), out_dir.display());
    Ok(ExportReport { index, fragments })
}
