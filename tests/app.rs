use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use backend_api::{
    api::{ApiRoutes, FailureReport},
    build_app,
};

/// An app whose test API failed to load, the way a missing DATABASE_URL
/// would produce at startup. No database needed.
fn degraded_app() -> Router {
    let err = anyhow::anyhow!("DATABASE_URL not set").context("connecting to Postgres");
    build_app(ApiRoutes::Failed(FailureReport::from_error(&err)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_reports_running() {
    let (status, body) = get_json(degraded_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    for key in ["message", "status", "swagger", "api"] {
        assert!(body[key].is_string(), "{key} should be a string");
    }
    assert_eq!(body["status"], "ok");
    assert_eq!(body["swagger"], "/docs");
    assert_eq!(body["api"], "/api/test");
}

#[tokio::test]
async fn health_answers_without_a_database() {
    let (status, body) = get_json(degraded_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["service"].is_string());
}

#[tokio::test]
async fn fallback_stub_reports_the_load_failure() {
    let (status, body) = get_json(degraded_app(), "/api/test/").await;

    assert_eq!(status, StatusCode::OK);
    for key in ["error", "details", "traceback"] {
        let value = body[key].as_str().unwrap_or_default();
        assert!(!value.is_empty(), "{key} should be a non-empty string");
    }
    assert_eq!(body["details"], "connecting to Postgres");
    assert!(body["traceback"]
        .as_str()
        .unwrap()
        .contains("DATABASE_URL not set"));
}

#[tokio::test]
async fn status_routes_survive_a_failed_load() {
    let app = degraded_app();
    let (status, _) = get_json(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn preflight_from_any_origin_is_allowed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom")
        .body(Body::empty())
        .unwrap();

    let response = degraded_app().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://example.com")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
}

#[tokio::test]
async fn cors_headers_on_simple_requests_too() {
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = degraded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}
