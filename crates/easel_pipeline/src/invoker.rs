//! Model invocation.

use easel_core::{PromptPayload, RawModelOutput};
use easel_error::{PipelineError, PipelineErrorKind};
use easel_models::CompletionDriver;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Default upper bound for one model call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Performs exactly one bounded call to a completion driver.
///
/// The driver is passed per call rather than owned, so the invoker carries
/// nothing but its timeout. There is no retry here; callers that want one
/// rerun the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInvoker {
    timeout: Duration,
}

impl ModelInvoker {
    /// Creates an invoker with the given timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// The timeout applied to each call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Calls `driver` once, passing `title` as the call's attribution.
    ///
    /// Transport, authentication and timeout failures become
    /// [`PipelineErrorKind::UpstreamFailure`]. The specific diagnostic is
    /// logged here and carried in the error for local use only.
    ///
    /// Dropping the returned future cancels the outbound request.
    #[instrument(skip(self, driver, prompt), fields(provider = driver.provider_name(), model = %model))]
    pub async fn invoke(
        &self,
        driver: &dyn CompletionDriver,
        prompt: &PromptPayload,
        model: &str,
        title: Option<&str>,
    ) -> Result<RawModelOutput, PipelineError> {
        debug!(timeout_ms = self.timeout.as_millis() as u64, "Invoking model");

        match tokio::time::timeout(self.timeout, driver.complete_titled(prompt, model, title)).await {
            Ok(Ok(output)) => {
                debug!(chars = output.text().chars().count(), "Model answered");
                Ok(output)
            }
            Ok(Err(e)) => {
                error!(error = %e, "Model call failed");
                Err(PipelineError::new(PipelineErrorKind::UpstreamFailure(
                    e.to_string(),
                )))
            }
            Err(_) => {
                let detail = format!("no answer within {} ms", self.timeout.as_millis());
                error!(detail = %detail, "Model call timed out");
                Err(PipelineError::new(PipelineErrorKind::UpstreamFailure(
                    detail,
                )))
            }
        }
    }
}

impl Default for ModelInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
