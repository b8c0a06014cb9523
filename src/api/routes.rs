use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::analysis::analyze_url;
use crate::api::models::{AnalyzeRequest, AnalyzeResponse, StatusResponse};
use crate::api::response;
use crate::dashboard;
use crate::error::{AppError, Result};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/analyze", post(dashboard::analyze_form))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/status", get(status_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse> {
    let url = req.url.trim();
    if url.is_empty() {
        return Err(AppError::InvalidRequest("url must not be empty".to_string()));
    }

    match analyze_url(state.fetcher.as_ref(), url).await {
        Ok(result) => {
            info!(url, "served analysis");
            Ok(response::success(AnalyzeResponse::new(url, &result)))
        }
        Err(err) => {
            warn!(url, error = %err, "analysis failed");
            Err(err)
        }
    }
}

async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    response::success(StatusResponse {
        firecrawl_api_key_set: state.config.has_api_key(),
    })
}
