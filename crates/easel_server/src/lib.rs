//! HTTP surface for the Easel structured-generation service.
//!
//! Exposes the outline endpoint (`POST /preview-ppt`), the diagram endpoint
//! (`POST /generate-mermaid`) and a liveness probe (`GET /health`) over a
//! shared [`GenerationPipeline`](easel_pipeline::GenerationPipeline).

mod api;
mod config;
mod error;
mod metrics;
mod server;
mod state;

pub use api::{cors_layer, create_router};
pub use config::{
    DEFAULT_DIAGRAM_MODEL, DEFAULT_DIAGRAM_TITLE, DEFAULT_OUTLINE_MODEL, DEFAULT_OUTLINE_TITLE,
    DEFAULT_PORT, EaselConfig, GenerationSettings, ServerSettings, UpstreamSettings,
};
pub use error::ApiError;
#[cfg(feature = "metrics")]
pub use metrics::PipelineMetrics;
pub use server::{build_pipeline, serve};
pub use state::AppState;
