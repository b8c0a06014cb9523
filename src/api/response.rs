use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Envelope shared by every JSON endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: &'static str,
    pub status_code: u16,
    pub timestamp: String,
    pub message: Option<String>,
}

fn envelope<T>(
    status: StatusCode,
    data: Option<T>,
    message: Option<String>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    let meta = ResponseMeta {
        status: if status.is_success() { "success" } else { "error" },
        status_code: status.as_u16(),
        timestamp: Utc::now().to_rfc3339(),
        message,
    };

    (status, Json(ApiResponse { data, meta }))
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    envelope(StatusCode::OK, Some(data), None)
}

pub fn error<T>(status: StatusCode, message: String) -> (StatusCode, Json<ApiResponse<T>>) {
    envelope(status, None, Some(message))
}
