// Axum API Server Module
//
// Purpose: serve the home page, practice pages and a small JSON API over the
// built-in practice area registry.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::catalog::PracticeRegistry;
use crate::config::SiteConfig;
use crate::error::RenderError;
use crate::presenter::{PracticePresenter, PracticeSummary, Resolution};
use crate::web::handlers::pages::{home_page, not_found_page, practice_page};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub presenter: Arc<PracticePresenter>,
    /// Serialized view models keyed by slug
    pub cache: Cache<String, serde_json::Value>,
    /// Rendered HTML keyed by "home" or "practice:{slug}"
    pub page_cache: Cache<String, String>,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Building practice registry...");
        let registry = Arc::new(PracticeRegistry::builtin()?);

        let presenter = Arc::new(PracticePresenter::new(registry, config));

        tracing::info!("Initializing Moka caches...");
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(300))
            .build();
        let page_cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Ok(Self {
            presenter,
            cache,
            page_cache,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/", get(home_page))
        .route("/practice/:slug", get(practice_page))

        // Practice area endpoints (JSON API)
        // The static "slugs" segment wins over :slug
        .route("/api/practice", get(list_practice_areas))
        .route("/api/practice/slugs", get(get_all_slugs))
        .route("/api/practice/:slug", get(get_practice))

        .fallback(not_found_page)

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

async fn list_practice_areas(State(state): State<AppState>) -> Json<serde_json::Value> {
    let data: Vec<PracticeSummary> = state.presenter.home().areas;
    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

/// All valid slugs (for static generation)
async fn get_all_slugs(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .presenter
            .registry()
            .get_all_slugs()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

async fn get_practice(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    if let Some(cached) = state.cache.get(&slug).await {
        tracing::debug!("Cache hit for practice {}", slug);
        return Ok(Json(cached));
    }

    let view = match state.presenter.resolve(&slug) {
        Resolution::Found(view) => view,
        Resolution::NotFound => {
            return Err(AppError::NotFound(format!("Practice area {} not found", slug)));
        }
    };

    let result = serde_json::to_value(&view)
        .map_err(|e| AppError::Internal(format!("JSON serialization error: {}", e)))?;

    state.cache.insert(slug, result.clone()).await;

    Ok(Json(result))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
    Internal(String),
    NotFound(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Template(e) => AppError::Template(e.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
