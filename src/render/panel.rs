//! Full-width panel layout for rich projects.

use crate::catalog::{DetailSection, ProjectRecord, ProjectVariant};
use crate::render::markup::{checked_items, tech_badges};

/// Panel formatter: the full in-page layout for a rich project.
pub struct PanelFormatter;

impl PanelFormatter {
    /// Build the panel layout, or `None` for a simple record.
    pub fn format(record: &ProjectRecord, placeholder_image: &str) -> Option<String> {
        let ProjectVariant::Rich { sections } = &record.variant else {
            return None;
        };

        let mut html = String::with_capacity(4096);

        // Header
        html.push_str("<div class=\"project-header-page\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", record.title));
        html.push_str(&format!("<p class=\"project-date\">{}</p>\n", record.date));
        html.push_str("</div>\n");

        // Image | overview + tech stack
        html.push_str("<div class=\"project-page-grid\">\n");
        html.push_str("<div class=\"grid-item\">\n");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{} screenshot\" class=\"project-main-image\">\n",
            record.image_or(placeholder_image),
            record.title
        ));
        html.push_str("</div>\n");
        html.push_str("<div class=\"grid-item\">\n");
        html.push_str("<div class=\"detail-block\">\n");
        html.push_str("<h4><i class=\"fas fa-info-circle\"></i> Overview</h4>\n");
        html.push_str(&format!("<p>{}</p>\n", record.overview));
        html.push_str("</div>\n");
        html.push_str("<div class=\"detail-block\">\n");
        html.push_str("<h4><i class=\"fas fa-code-branch\"></i> Tech Stack</h4>\n");
        html.push_str(&format!(
            "<div class=\"tech-stack\">{}</div>\n",
            tech_badges(&record.technologies)
        ));
        html.push_str("</div>\n");
        html.push_str("</div>\n");
        html.push_str("</div>\n");

        html.push_str("<hr class=\"project-divider\">\n");

        // Achievements grid
        html.push_str("<div class=\"project-achievements\">\n");
        html.push_str("<h3><i class=\"fas fa-trophy\"></i> Key Achievements and Technical Details</h3>\n");
        html.push_str("<div class=\"technical-details-grid\">\n");
        for section in sections {
            html.push_str(&detail_block(section));
        }
        html.push_str("</div>\n");
        html.push_str("</div>\n");

        html.push_str("<hr class=\"project-divider\">\n");

        // Code
        html.push_str("<div class=\"code-snippet-page\">\n");
        html.push_str("<h3><i class=\"fas fa-terminal\"></i> Core Code Snippet</h3>\n");
        html.push_str(&format!(
            "<pre><code class=\"code-section\">{}</code></pre>\n",
            record.code_snippet.trim()
        ));
        html.push_str("</div>\n");

        Some(html)
    }
}

fn detail_block(section: &DetailSection) -> String {
    format!(
        "<div class=\"detail-block achievement-block\">\n<h4><i class=\"{}\"></i> {}</h4>\n<ul class=\"features-list\">{}</ul>\n</div>\n",
        section.icon,
        section.heading,
        checked_items(&section.details)
    )
}
