// Axum Server Module
//
// Purpose: serve the portfolio page, its htmx fragments and a small JSON API
// over the static project catalog. Each request gets its own view controller;
// only the catalog and the render cache are shared.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::catalog::{ContentCatalog, ProjectRecord, ProjectSummary};
use crate::config::SiteConfig;
use crate::render::ProjectRenderer;
use crate::view::ViewController;
use crate::web::handlers::{fragments, pages, parse_project_id, Rendered};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ContentCatalog>,
    pub renderer: ProjectRenderer,
    /// Rendered fragments keyed by route; records never change after startup
    pub cache: Cache<String, Rendered>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading project catalog...");
        let catalog = config.load_catalog()?;
        tracing::info!("Loaded {} projects", catalog.len());
        Ok(Self::with_catalog(catalog, config))
    }

    pub fn with_catalog(catalog: Arc<ContentCatalog>, config: &SiteConfig) -> Self {
        tracing::info!("Initializing Moka render cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            catalog,
            renderer: ProjectRenderer::new(config.placeholder_image.clone()),
            cache,
            static_dir: config.static_dir.clone(),
        }
    }

    /// Fresh view state, as on a first page load.
    pub fn controller(&self) -> ViewController {
        ViewController::new(Arc::clone(&self.catalog), self.renderer.clone())
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Pages (full document, or `<main>` for htmx)
        .route("/", get(pages::home_page))
        .route("/sections/:name", get(pages::show_section))
        .route("/projects/:id/page", get(pages::project_page))

        // Overlay fragments
        .route("/projects/:id/modal", get(fragments::project_modal))
        .route("/modal/close", post(fragments::close_modal))

        // JSON API
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:id", get(get_project))

        // Images and stylesheet
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectSummary>> {
    Json(state.catalog.summaries())
}

async fn get_project(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProjectRecord>, AppError> {
    let record = parse_project_id(&raw_id)
        .and_then(|id| state.catalog.lookup(id))
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", raw_id)))?;
    Ok(Json(record.clone()))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
