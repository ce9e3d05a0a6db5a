// Page handlers for HTML rendering with Askama
//
// Full pages for plain requests, the `<main>` fragment for htmx requests.
// Misses (unknown section or project) leave the view untouched: htmx
// requests get 204 so nothing is swapped, plain requests get the page in
// its initial state.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_htmx::{HxRequest, HxReswap, HxRetarget, SwapOption};

use crate::api_server::{AppError, AppState};
use crate::catalog::ProjectSummary;
use crate::router::PANEL_SECTION_NAME;
use crate::view::{Transition, ViewController};
use crate::web::handlers::{parse_project_id, Rendered};

pub const SITE_TITLE: &str = "Portfolio";

// ============================================================================
// View data
// ============================================================================

pub struct SectionView {
    pub id: String,
    pub name: String,
    pub label: String,
    pub active: bool,
    pub in_nav: bool,
}

pub struct PageView {
    pub sections: Vec<SectionView>,
    pub projects: Vec<ProjectSummary>,
    pub panel_content: String,
    pub overlay_markup: String,
    pub modal_open: bool,
}

impl PageView {
    pub fn from_controller(view: &ViewController) -> Self {
        let sections = view
            .router()
            .sections()
            .iter()
            .map(|section| SectionView {
                id: section.id.clone(),
                name: section.name.clone(),
                label: section_label(&section.name),
                active: section.active,
                in_nav: section.name != PANEL_SECTION_NAME,
            })
            .collect();

        Self {
            sections,
            projects: view.catalog().summaries(),
            panel_content: view.panel_content().to_string(),
            overlay_markup: view.overlay_markup(),
            modal_open: view.is_modal_open(),
        }
    }
}

/// `skills` -> `Skills`, `pet-project` -> `Pet Project`
fn section_label(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub page: PageView,
}

#[derive(Template)]
#[template(path = "partials/main.html")]
pub struct MainTemplate {
    pub page: PageView,
}

/// Full HTML document for the current view state.
pub fn render_full_page(view: &ViewController) -> Result<String, AppError> {
    let template = IndexTemplate {
        title: SITE_TITLE.to_string(),
        page: PageView::from_controller(view),
    };
    template
        .render()
        .map_err(|e| AppError::Template(e.to_string()))
}

/// The `<main id="sections">` element for the current view state.
pub fn render_main(view: &ViewController) -> Result<String, AppError> {
    let template = MainTemplate {
        page: PageView::from_controller(view),
    };
    template
        .render()
        .map_err(|e| AppError::Template(e.to_string()))
}

fn render_for(view: &ViewController, is_htmx: bool) -> Result<String, AppError> {
    if is_htmx {
        render_main(view)
    } else {
        render_full_page(view)
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = state.controller();
    Ok(Html(render_full_page(&view)?))
}

pub async fn show_section(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let mut view = state.controller();

    if let Err(e) = view.show_section(&name) {
        tracing::debug!("Ignoring section request: {}", e);
        if is_htmx {
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
    }

    Ok(Html(render_for(&view, is_htmx)?).into_response())
}

pub async fn project_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let cache_key = format!("page:{}:{}", raw_id, is_htmx);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(page_response(cached));
    }

    let mut view = state.controller();
    let transition = match parse_project_id(&raw_id).map(|id| view.show_project_page(id)) {
        Some(Ok(transition)) => transition,
        miss => {
            tracing::debug!("Ignoring project page request for {:?}: {:?}", raw_id, miss);
            if is_htmx {
                return Ok(StatusCode::NO_CONTENT.into_response());
            }
            return Ok(Html(render_full_page(&view)?).into_response());
        }
    };

    let rendered = match transition {
        Transition::FellBackToOverlay(_) if is_htmx => Rendered {
            body: view.overlay_markup(),
            retarget_overlay: true,
        },
        _ => Rendered {
            body: render_for(&view, is_htmx)?,
            retarget_overlay: false,
        },
    };

    state.cache.insert(cache_key, rendered.clone()).await;
    Ok(page_response(rendered))
}

fn page_response(rendered: Rendered) -> Response {
    if rendered.retarget_overlay {
        (
            HxRetarget("#projectModal".to_string()),
            HxReswap(SwapOption::OuterHtml),
            Html(rendered.body),
        )
            .into_response()
    } else {
        Html(rendered.body).into_response()
    }
}
