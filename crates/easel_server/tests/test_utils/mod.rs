//! Test utilities for HTTP tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use easel_core::{PromptPayload, RawModelOutput};
use easel_models::{CompletionDriver, ModelError};
use easel_pipeline::{GenerationPipeline, ModelChoice};
use easel_server::{AppState, create_router};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// A driver that always gives the same answer and counts calls.
#[derive(Debug)]
pub struct FixedDriver {
    answer: Result<String, ModelError>,
    calls: AtomicUsize,
}

impl FixedDriver {
    /// Answers every call with `text`.
    pub fn responding(text: impl Into<String>) -> Self {
        Self {
            answer: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call with `error`.
    pub fn failing(error: ModelError) -> Self {
        Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionDriver for FixedDriver {
    async fn complete(
        &self,
        _prompt: &PromptPayload,
        model: &str,
    ) -> Result<RawModelOutput, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
            .clone()
            .map(|text| RawModelOutput::new(text, model))
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

/// Router over a pipeline backed by `driver`.
pub fn router(driver: Arc<FixedDriver>) -> Router {
    let pipeline = GenerationPipeline::new(driver, ModelChoice::new("outline-model", "diagram-model"));
    create_router(AppState::new(pipeline))
}

/// Sends a POST with a raw body and returns status and parsed JSON body.
pub async fn post(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(router, request).await
}

/// Sends `request` and returns status and parsed JSON body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = serde_json::from_slice(&bytes).expect("JSON body");
    (status, json)
}

/// A JSON array of `count` well-formed slides, as text.
pub fn slides_text(count: usize) -> String {
    let slides: Vec<Value> = (1..=count)
        .map(|n| {
            serde_json::json!({
                "title": format!("Slide {}", n),
                "content": ["First point", "Second point", "Third point"],
                "layout": "content",
                "notes": "Speaker note."
            })
        })
        .collect();
    Value::Array(slides).to_string()
}
