//! Core data types for the Easel structured-generation service.
//!
//! This crate holds the request, prompt and result types shared by the
//! model client, the pipeline and the HTTP surface.

mod observability;
mod options;
mod output;
mod prompt;
mod request;

pub use observability::{init_metrics, init_tracing, shutdown_metrics};
pub use options::{Audience, RequestOption, SlideCount, Tone};
pub use output::{
    DiagramDescription, GenerationResult, OutputShape, RawModelOutput, Slide, SlideBuilder,
    SlideDeck, SlidePolicy,
};
pub use prompt::PromptPayload;
pub use request::{
    DiagramRequest, GenerationRequest, MIN_REQUIREMENTS_LEN, OutlineRequest,
    OutlineRequestBuilder, UseCase,
};
