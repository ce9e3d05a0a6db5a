//! View Integration Tests
//!
//! Drives the four entry points against hand-built catalogs and the
//! built-in one, checking the rendered markup and the view state.

use portfolio_site::catalog::{DetailSection, ProjectRecord, ProjectVariant};
use portfolio_site::router::{PANEL_SECTION_ID, DEFAULT_SECTIONS};
use portfolio_site::{ContentCatalog, ProjectRenderer, Transition, ViewController, ViewError};
use std::sync::Arc;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn simple_record(id: u32, title: &str, features: &[&str], technologies: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id,
        title: title.to_string(),
        date: "2025".to_string(),
        overview: "An overview".to_string(),
        technologies: strings(technologies),
        code_snippet: "\n  print('hi')  \n".to_string(),
        image: None,
        variant: ProjectVariant::Simple {
            features: strings(features),
        },
    }
}

fn rich_record(id: u32) -> ProjectRecord {
    ProjectRecord {
        id,
        title: "Rich".to_string(),
        date: "Academic Project".to_string(),
        overview: "Rich overview".to_string(),
        technologies: strings(&["CNNs", "Node.js"]),
        code_snippet: "predict()".to_string(),
        image: Some("rich.png".to_string()),
        variant: ProjectVariant::Rich {
            sections: vec![
                DetailSection {
                    heading: "First".to_string(),
                    icon: "fas fa-brain".to_string(),
                    details: strings(&["d1", "d2", "d3"]),
                },
                DetailSection {
                    heading: "Second".to_string(),
                    icon: "fas fa-server".to_string(),
                    details: strings(&["d4", "d5"]),
                },
            ],
        },
    }
}

fn controller_with(records: Vec<ProjectRecord>) -> ViewController {
    let catalog = Arc::new(ContentCatalog::from_records(records).unwrap());
    ViewController::new(catalog, ProjectRenderer::default())
}

fn builtin_controller() -> ViewController {
    let catalog = Arc::new(ContentCatalog::builtin().unwrap());
    ViewController::new(catalog, ProjectRenderer::default())
}

fn active_sections(view: &ViewController) -> Vec<String> {
    view.router()
        .sections()
        .iter()
        .filter(|s| s.active)
        .map(|s| s.id.clone())
        .collect()
}

#[test]
fn overlay_lists_badges_and_features_in_order() {
    let mut view = controller_with(vec![simple_record(1, "A", &["f1", "f2"], &["T1"])]);
    view.open_project_modal(1).unwrap();

    let html = &view.overlay().content;
    assert_eq!(html.matches("<span class=\"tech-tag\">").count(), 1);
    assert!(html.contains("<span class=\"tech-tag\">T1</span>"));
    assert_eq!(html.matches("<li>").count(), 2);

    let f1 = html.find("</i> f1</li>").unwrap();
    let f2 = html.find("</i> f2</li>").unwrap();
    assert!(f1 < f2);

    assert!(html.contains("src=\"placeholder-image-url.jpg\""));
    assert!(html.contains("<code class=\"code-section\">print('hi')</code>"));
    assert!(view.is_modal_open());
}

#[test]
fn list_like_features_stay_one_bullet_each() {
    let features = ["1. Ranked first of 40 teams", "- halved latency", "# heading-ish"];
    let mut view = controller_with(vec![simple_record(1, "A", &features, &["T1"])]);
    view.open_project_modal(1).unwrap();

    let html = &view.overlay().content;
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(!html.contains("<ol>"));
    assert!(!html.contains("<ul>"));
    assert!(!html.contains("<h1>"));
    for feature in features {
        assert!(html.contains(&format!("</i> {}</li>", feature)), "missing {}", feature);
    }
}

#[test]
fn panel_groups_details_by_section() {
    let mut view = controller_with(vec![rich_record(5)]);
    assert_eq!(view.show_project_page(5), Ok(Transition::PanelShown(5)));

    let html = view.panel_content();
    assert_eq!(html.matches("<li>").count(), 5);
    assert_eq!(html.matches("achievement-block").count(), 2);

    let order: Vec<usize> = ["First", "d1", "d2", "d3", "Second", "d4", "d5"]
        .iter()
        .map(|m| html.find(m).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(active_sections(&view), vec![PANEL_SECTION_ID.to_string()]);
    assert!(!view.is_modal_open());
}

#[test]
fn panel_request_for_simple_record_opens_overlay() {
    let mut view = controller_with(vec![simple_record(2, "Simple", &["x"], &["T"])]);
    assert_eq!(view.show_project_page(2), Ok(Transition::FellBackToOverlay(2)));
    assert!(view.is_modal_open());
    assert!(view.overlay().content.contains("<h3>Simple</h3>"));
    assert_eq!(view.active_section(), Some("home-section"));
}

#[test]
fn unknown_project_changes_nothing() {
    let mut view = builtin_controller();
    let before = view.snapshot();

    assert_eq!(view.open_project_modal(77), Err(ViewError::RecordNotFound(77)));
    assert!(!view.is_modal_open());
    assert_eq!(view.snapshot(), before);
}

#[test]
fn section_switching_keeps_one_active() {
    let mut view = builtin_controller();
    for name in DEFAULT_SECTIONS {
        view.show_section(name).unwrap();
        assert_eq!(active_sections(&view).len(), 1);
    }

    view.show_section("about").unwrap();
    view.show_section("contact").unwrap();
    assert_eq!(active_sections(&view), vec!["contact-section".to_string()]);
}

#[test]
fn panel_name_uses_fixed_id() {
    let mut view = builtin_controller();
    assert_eq!(
        view.show_section("pet-project"),
        Ok(Transition::SectionShown(PANEL_SECTION_ID.to_string()))
    );
}

#[test]
fn unknown_section_is_ignored() {
    let mut view = builtin_controller();
    view.show_section("skills").unwrap();

    let err = view.show_section("nonexistent").unwrap_err();
    assert_eq!(err, ViewError::UnknownSection("nonexistent-section".to_string()));
    assert_eq!(active_sections(&view), vec!["skills-section".to_string()]);

    // Repeating the miss is still a no-op
    let before = view.snapshot();
    let _ = view.show_section("nonexistent");
    assert_eq!(view.snapshot(), before);
}

#[test]
fn closing_overlay_keeps_panel() {
    let mut view = builtin_controller();
    view.show_project_page(5).unwrap();
    view.open_project_modal(1).unwrap();
    view.close_project_modal();

    assert!(!view.is_modal_open());
    assert!(view.overlay().content.is_empty());
    assert_eq!(view.active_section(), Some(PANEL_SECTION_ID));
    assert!(view.panel_content().contains("PET BREED AND HEALTH IDENTIFIER"));
}

#[test]
fn builtin_catalog_renders_every_record() {
    let mut view = builtin_controller();
    let ids: Vec<u32> = view.catalog().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    for id in ids {
        let transition = view.show_project_page(id).unwrap();
        if id == 5 {
            assert_eq!(transition, Transition::PanelShown(5));
        } else {
            assert_eq!(transition, Transition::FellBackToOverlay(id));
        }
        view.close_project_modal();
    }
}
