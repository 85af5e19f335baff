//! HTTP surface tests using in-process requests.

mod test_utils;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use easel_models::ModelError;
use serde_json::json;
use std::sync::Arc;
use test_utils::{FixedDriver, post, router, send, slides_text};

#[tokio::test]
async fn test_outline_success_body() {
    let driver = Arc::new(FixedDriver::responding(format!(
        "```json\n{}\n```",
        slides_text(4)
    )));
    let body = json!({
        "requirements": "Create a presentation about solar energy benefits",
        "slideCount": 4,
        "tone": "professional",
        "audience": "executives"
    });

    let (status, json) = post(router(driver.clone()), "/preview-ppt", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let slides = json["slides"].as_array().expect("slides array");
    assert_eq!(slides.len(), 4);
    assert_eq!(slides[0]["title"], "Slide 1");
    assert_eq!(slides[3]["title"], "Slide 4");
    assert_eq!(slides[0]["content"].as_array().map(Vec::len), Some(3));
    assert_eq!(slides[0]["layout"], "content");
    assert_eq!(slides[0]["notes"], "Speaker note.");
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn test_diagram_success_body() {
    let driver = Arc::new(FixedDriver::responding("```mermaid\ngraph TD\n  A --> B\n```"));
    let body = json!({ "requirements": "Create a flowchart for a user login process" });

    let (status, json) = post(router(driver), "/generate-mermaid", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "mermaidCode": "graph TD\n  A --> B" }));
}

#[tokio::test]
async fn test_short_requirements_is_bad_request() {
    let driver = Arc::new(FixedDriver::responding(slides_text(6)));

    let (status, json) = post(
        router(driver.clone()),
        "/preview-ppt",
        r#"{"requirements": "short"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Requirements must be a string with at least 10 characters"
    );
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_option_is_bad_request() {
    let driver = Arc::new(FixedDriver::responding(slides_text(6)));
    let body = json!({
        "requirements": "Create a presentation about solar energy benefits",
        "slideCount": 5
    });

    let (status, json) = post(router(driver.clone()), "/preview-ppt", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Slide count must be one of: 4, 6, 8");
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let driver = Arc::new(FixedDriver::responding("graph TD"));

    let (status, json) = post(router(driver.clone()), "/generate-mermaid", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let driver = Arc::new(FixedDriver::responding("graph TD"));
    let request = Request::builder()
        .method("POST")
        .uri("/generate-mermaid")
        .body(Body::from(r#"{"requirements": "Create a flowchart for login"}"#))
        .expect("valid request");

    let (status, json) = send(router(driver), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_shape_mismatch_is_server_error_naming_counts() {
    let driver = Arc::new(FixedDriver::responding(slides_text(5)));
    let body = json!({
        "requirements": "Create a presentation about solar energy benefits",
        "slideCount": 4
    });

    let (status, json) = post(router(driver), "/preview-ppt", &body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().expect("error message");
    assert!(message.contains("expected 4, got 5"), "got {:?}", message);
}

#[tokio::test]
async fn test_upstream_failure_is_generic_server_error() {
    let driver = Arc::new(FixedDriver::failing(ModelError::Api {
        status: 401,
        message: "No auth credentials found".to_string(),
    }));
    let body = json!({ "requirements": "Create a flowchart for a user login process" });

    let (status, json) = post(router(driver), "/generate-mermaid", &body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to reach the generation service" }));
}

#[tokio::test]
async fn test_malformed_output_hides_raw_text() {
    let driver = Arc::new(FixedDriver::responding("I cannot help with that, secret-token-123"));
    let body = json!({ "requirements": "Create a presentation about solar energy benefits" });

    let (status, json) = post(router(driver), "/preview-ppt", &body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to parse the generated output" }));
}

#[tokio::test]
async fn test_health() {
    let driver = Arc::new(FixedDriver::responding(""));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("valid request");

    let (status, json) = send(router(driver.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    let timestamp = json["timestamp"].as_str().expect("timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn test_cors_headers_for_configured_origin() -> Result<(), Box<dyn std::error::Error>> {
    let driver = Arc::new(FixedDriver::responding(""));
    let app = router(driver).layer(easel_server::cors_layer("http://localhost:3000")?);
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())?;

    let response = tower::ServiceExt::oneshot(app, request).await?;

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("http://localhost:3000"))
    );
    Ok(())
}

#[test]
fn test_invalid_cors_origin_is_config_error() {
    assert!(easel_server::cors_layer("bad\norigin").is_err());
    assert!(easel_server::cors_layer("*").is_ok());
}
