//! HTTP routes.

use crate::{ApiError, AppState};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use easel_core::{GenerationResult, UseCase};
use easel_error::{ConfigError, PipelineError};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument};

/// Creates the API router.
///
/// | Method | Path                | Body                          |
/// |--------|---------------------|-------------------------------|
/// | POST   | `/preview-ppt`      | `{"slides": [...]}`           |
/// | POST   | `/generate-mermaid` | `{"mermaidCode": "..."}`      |
/// | GET    | `/health`           | `{"status", "timestamp"}`     |
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/preview-ppt", post(preview_slides))
        .route("/generate-mermaid", post(generate_diagram))
        .route("/health", get(health_check))
        .with_state(state)
}

/// CORS layer for `origin`; `*` allows any origin.
///
/// # Errors
///
/// Returns `ConfigError` if `origin` is not a valid header value.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }
    let origin = HeaderValue::from_str(origin.trim())
        .map_err(|e| ConfigError::new(format!("Invalid CORS origin {:?}: {}", origin, e)))?;
    Ok(layer.allow_origin(origin))
}

/// Slide outline endpoint.
#[instrument(skip_all)]
async fn preview_slides(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    generate(&state, UseCase::Outline, body).await
}

/// Diagram endpoint.
#[instrument(skip_all)]
async fn generate_diagram(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    generate(&state, UseCase::Diagram, body).await
}

async fn generate(
    state: &AppState,
    use_case: UseCase,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        PipelineError::invalid_request(format!(
            "Request body must be a JSON object: {}",
            rejection.body_text()
        ))
    })?;

    #[cfg(feature = "metrics")]
    let started = std::time::Instant::now();

    let outcome = state.pipeline.run(use_case, &body).await;

    #[cfg(feature = "metrics")]
    state
        .metrics
        .record(&use_case.to_string(), started.elapsed().as_secs_f64(), &outcome);

    if let Err(e) = &outcome {
        info!(use_case = %use_case, kind = e.label(), "Generation request failed");
    }
    Ok(Json(outcome?))
}

/// Liveness probe.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
