//! Shared handler state.

use easel_pipeline::GenerationPipeline;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use crate::PipelineMetrics;

/// State shared by all handlers.
///
/// Cloning is cheap; the pipeline is immutable and shared.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The generation pipeline
    pub pipeline: Arc<GenerationPipeline>,
    /// Request and failure instruments
    #[cfg(feature = "metrics")]
    pub metrics: PipelineMetrics,
}

impl AppState {
    /// Creates handler state around a pipeline.
    pub fn new(pipeline: GenerationPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            #[cfg(feature = "metrics")]
            metrics: PipelineMetrics::new(),
        }
    }
}
