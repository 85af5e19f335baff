//! The completion capability used by the pipeline.

use crate::ModelError;
use async_trait::async_trait;
use easel_core::{PromptPayload, RawModelOutput};

/// A single-shot text completion capability.
///
/// Implementations perform exactly one outbound call per invocation and hold
/// no per-request state, so one instance can be shared across requests.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Sends the prompt to `model` and returns the raw answer text.
    async fn complete(
        &self,
        prompt: &PromptPayload,
        model: &str,
    ) -> Result<RawModelOutput, ModelError>;

    /// Same as [`complete`](Self::complete), with an attribution title for
    /// this call. Drivers without attribution ignore the title.
    async fn complete_titled(
        &self,
        prompt: &PromptPayload,
        model: &str,
        title: Option<&str>,
    ) -> Result<RawModelOutput, ModelError> {
        let _ = title;
        self.complete(prompt, model).await
    }

    /// Provider name, for logging.
    fn provider_name(&self) -> &str;
}
