use crate::engine::{SearchMode, Searcher};
use crate::error::SearchError;
use crate::index::IndexStats;
use crate::result::SearchResult;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ========== Request/Response Types ==========

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub q: String,
    #[serde(default)]
    pub mode: Option<String>, // "and" or "or"
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub mode: String,
    pub total: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(message: String) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

// ========== Error Handling ==========

struct AppError(SearchError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SearchError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.0.to_string();
        tracing::error!("API error: {}", message);

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        Self(err)
    }
}

// ========== Handlers ==========

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK"))
}

async fn search_documents(
    State(searcher): State<Arc<Searcher>>,
    Query(req): Query<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mode = match req.mode.as_deref() {
        Some(mode) => mode.parse::<SearchMode>()?,
        None => SearchMode::And,
    };

    let results = searcher.search(&req.q, mode);

    let response = SearchResponse {
        query: req.q,
        mode: mode.to_string(),
        total: results.len(),
        results,
    };

    Ok(Json(ApiResponse::success(response)))
}

async fn get_stats(State(searcher): State<Arc<Searcher>>) -> Json<ApiResponse<IndexStats>> {
    Json(ApiResponse::success(searcher.stats()))
}

// ========== Router ==========

pub fn create_router(searcher: Arc<Searcher>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search_documents))
        .route("/stats", get(get_stats))
        .with_state(searcher)
}
