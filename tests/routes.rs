mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::{StaticPage, Unreachable, ARTICLE_PAGE};
use readability_scorer::{api::routes::create_router, config::Config, fetcher::PageFetcher, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(fetcher: impl PageFetcher + 'static, api_key: Option<&str>) -> Router {
    let config = Config {
        firecrawl_api_key: api_key.map(str::to_string),
        ..Config::default()
    };
    create_router(AppState::with_fetcher(config, fetcher))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form_post(url: &str) -> Request<Body> {
    Request::post("/analyze")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("url={url}")))
        .unwrap()
}

#[tokio::test]
async fn index_shows_missing_key_badge() {
    let response = app(StaticPage(ARTICLE_PAGE), None)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Content Readability Scorer"));
    assert!(html.contains("Firecrawl API key is not set"));
}

#[tokio::test]
async fn status_reports_configured_key() {
    let response = app(StaticPage(ARTICLE_PAGE), Some("fc-test"))
        .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["data"]["firecrawl_api_key_set"], json!(true));
    assert_eq!(body["meta"]["status"], json!("success"));
}

#[tokio::test]
async fn api_analyze_returns_metrics_with_labels() {
    let response = app(StaticPage(ARTICLE_PAGE), Some("fc-test"))
        .oneshot(json_post("/api/analyze", json!({ "url": "https://example.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    let data = &body["data"];
    assert_eq!(data["url"], json!("https://example.com"));
    assert_eq!(data["total_words"], json!(6));
    assert_eq!(data["total_sentences"], json!(2));

    let metrics = data["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 5);
    assert_eq!(metrics[0]["metric"], json!("flesch_reading_ease"));
    assert_eq!(metrics[0]["label"], json!("Very Easy"));
    assert_eq!(metrics[2]["name"], json!("SMOG Index"));
}

#[tokio::test]
async fn api_analyze_failure_uses_error_envelope() {
    let response = app(Unreachable, Some("fc-test"))
        .oneshot(json_post("/api/analyze", json!({ "url": "https://down.invalid" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["data"].is_null());
    assert_eq!(body["meta"]["status"], json!("error"));
    let message = body["meta"]["message"].as_str().unwrap();
    assert!(message.contains("https://down.invalid"));
}

#[tokio::test]
async fn api_analyze_rejects_blank_url() {
    let response = app(StaticPage(ARTICLE_PAGE), Some("fc-test"))
        .oneshot(json_post("/api/analyze", json!({ "url": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn form_submission_renders_report() {
    let response = app(StaticPage(ARTICLE_PAGE), Some("fc-test"))
        .oneshot(form_post("https%3A%2F%2Fexample.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Readability Analysis Results"));
    assert!(html.contains("Total Words: 6"));
    assert!(html.contains("Readability Scores"));
    assert!(html.contains("Firecrawl API key is set"));
}

#[tokio::test]
async fn form_failure_renders_error_without_metrics() {
    let response = app(Unreachable, Some("fc-test"))
        .oneshot(form_post("https%3A%2F%2Fdown.invalid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_string(response).await;
    assert!(html.contains("Error analyzing https://down.invalid"));
    assert!(!html.contains("Readability Analysis Results"));
    assert!(!html.contains("<svg"));
}
