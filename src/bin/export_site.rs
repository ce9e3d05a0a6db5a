// Static Export Binary
//
// Purpose: Write the portfolio page and one fragment per project to disk
// Usage: cargo run --bin export_site -- [output_dir]   (default: dist)
//
// Output layout:
//   <output_dir>/index.html
//   <output_dir>/projects/<id>.html   (overlay or panel markup)

use portfolio_site::{export_site, ProjectRenderer, SiteConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let config = SiteConfig::from_env();
    let catalog = config.load_catalog()?;
    let renderer = ProjectRenderer::new(config.placeholder_image.clone());

    let report = export_site(catalog, &renderer, &output_dir)?;
    println!("Wrote {} and {} project fragments", report.index.display(), report.fragments.len());
    Ok(())
}
