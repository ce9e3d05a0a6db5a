// Overlay fragment handlers
//
// Both return the whole `#projectModal` element, swapped with outerHTML.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api_server::AppState;
use crate::web::handlers::{parse_project_id, Rendered};

pub async fn project_modal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let cache_key = format!("modal:{}", raw_id);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Html(cached.body).into_response();
    }

    let mut view = state.controller();
    match parse_project_id(&raw_id).map(|id| view.open_project_modal(id)) {
        Some(Ok(_)) => {
            let body = view.overlay_markup();
            state
                .cache
                .insert(
                    cache_key,
                    Rendered {
                        body: body.clone(),
                        retarget_overlay: false,
                    },
                )
                .await;
            Html(body).into_response()
        }
        miss => {
            tracing::debug!("Ignoring modal request for {:?}: {:?}", raw_id, miss);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

pub async fn close_modal(State(state): State<AppState>) -> Html<String> {
    let mut view = state.controller();
    view.close_project_modal();
    Html(view.overlay_markup())
}
