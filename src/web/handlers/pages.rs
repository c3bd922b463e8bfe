// Page handlers for HTML rendering with Askama

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api_server::{AppError, AppState};
use crate::presenter::Resolution;
use crate::web::templates::{render_home, render_not_found, render_practice};

// ============================================================================
// Home Page
// ============================================================================

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let cache_key = "home".to_string();
    if let Some(cached) = state.page_cache.get(&cache_key).await {
        return Ok(Html(cached));
    }

    let html = render_home(&state.presenter)?;
    state.page_cache.insert(cache_key, html.clone()).await;
    Ok(Html(html))
}

// ============================================================================
// Practice Page
// ============================================================================

pub async fn practice_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    // Unknown slugs never touch the cache
    if !state.presenter.registry().contains(&slug) {
        return not_found_response(&state);
    }

    let cache_key = format!("practice:{}", slug);
    if let Some(cached) = state.page_cache.get(&cache_key).await {
        tracing::debug!("Cache hit for practice page {}", slug);
        return Ok(Html(cached).into_response());
    }

    match state.presenter.resolve(&slug) {
        Resolution::Found(view) => {
            let html = render_practice(&state.presenter, &view)?;
            state.page_cache.insert(cache_key, html.clone()).await;
            Ok(Html(html).into_response())
        }
        Resolution::NotFound => not_found_response(&state),
    }
}

// ============================================================================
// Not Found
// ============================================================================

pub async fn not_found_page(State(state): State<AppState>) -> Result<Response, AppError> {
    not_found_response(&state)
}

fn not_found_response(state: &AppState) -> Result<Response, AppError> {
    let html = render_not_found(&state.presenter)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
