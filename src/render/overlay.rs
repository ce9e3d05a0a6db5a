//! Modal overlay body and the `#projectModal` container.

use crate::catalog::{ProjectRecord, ProjectVariant};
use crate::render::markup::{checked_items, tech_badges};

/// Overlay formatter: the modal body for a project.
pub struct OverlayFormatter;

impl OverlayFormatter {
    /// Build the overlay document for `record`.
    ///
    /// Achievements come from `features`; a rich record passed here lists
    /// the details of all its sections instead.
    pub fn format(record: &ProjectRecord, placeholder_image: &str) -> String {
        let achievements = match &record.variant {
            ProjectVariant::Simple { features } => checked_items(features),
            ProjectVariant::Rich { sections } => sections
                .iter()
                .map(|section| checked_items(&section.details))
                .collect(),
        };
        let image_src = record.image_or(placeholder_image);

        let mut html = String::with_capacity(2048);
        html.push_str(
            "<button class=\"close-button\" hx-post=\"/modal/close\" hx-target=\"#projectModal\" hx-swap=\"outerHTML\">&times;</button>\n",
        );

        html.push_str("<div class=\"modal-header\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", record.title));
        html.push_str(&format!("<p class=\"project-date\">{}</p>\n", record.date));
        html.push_str("</div>\n");

        html.push_str("<div class=\"project-image-container\">\n");
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{} screenshot\" class=\"project-modal-image\">\n",
            image_src, record.title
        ));
        html.push_str("</div>\n");

        html.push_str("<div class=\"modal-body\">\n");

        html.push_str("<div class=\"modal-section\">\n");
        html.push_str("<h4><i class=\"fas fa-code-branch\"></i> Tech Stack</h4>\n");
        html.push_str(&format!(
            "<div class=\"tech-stack\">{}</div>\n",
            tech_badges(&record.technologies)
        ));
        html.push_str("</div>\n");

        html.push_str("<div class=\"modal-section\">\n");
        html.push_str("<h4><i class=\"fas fa-eye\"></i> Overview</h4>\n");
        html.push_str(&format!("<p>{}</p>\n", record.overview));
        html.push_str("</div>\n");

        html.push_str("<div class=\"modal-section\">\n");
        html.push_str("<h4><i class=\"fas fa-trophy\"></i> Key Achievements</h4>\n");
        html.push_str(&format!("<ul class=\"features-list\">{}</ul>\n", achievements));
        html.push_str("</div>\n");

        html.push_str("<div class=\"modal-section\">\n");
        html.push_str("<h4><i class=\"fas fa-terminal\"></i> Code Snippet</h4>\n");
        html.push_str(&format!(
            "<pre><code class=\"code-section\">{}</code></pre>\n",
            record.code_snippet.trim()
        ));
        html.push_str("</div>\n");

        html.push_str("</div>\n");
        html
    }
}

/// Modal container: visible with content, or hidden and empty.
pub fn overlay_shell(visible: bool, content: &str) -> String {
    let display = if visible { "flex" } else { "none" };
    format!(
        "<div id=\"projectModal\" class=\"modal\" style=\"display: {}\" data-modal-open=\"{}\">\n<div id=\"modalContent\" class=\"modal-content\">\n{}</div>\n</div>\n",
        display, visible, content
    )
}
