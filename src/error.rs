use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    FetchError(String),

    #[error("Scraping service rejected the credential: {0}")]
    AuthError(String),

    #[error("Error parsing content: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Error analyzing {url}: {source}")]
    AnalysisFailed {
        url: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn analysis_failed(url: &str, source: AppError) -> Self {
        AppError::AnalysisFailed {
            url: url.to_string(),
            source: Box::new(source),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::FetchError(_) | AppError::AuthError(_) => StatusCode::BAD_GATEWAY,
            AppError::ParseError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::AnalysisFailed { source, .. } => source.status_code(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::error::<()>(self.status_code(), self.to_string()).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::ParseError(err.to_string())
        } else {
            AppError::FetchError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
