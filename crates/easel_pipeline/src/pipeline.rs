//! The generation pipeline.

use crate::{ModelInvoker, normalizer, prompt, result, validator};
use derive_getters::Getters;
use easel_core::{GenerationRequest, GenerationResult, SlidePolicy, UseCase};
use easel_error::{PipelineError, PipelineErrorKind};
use easel_models::CompletionDriver;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Fixed model identifier, and optional attribution title, per use case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ModelChoice {
    /// Model used for slide outlines
    outline: String,
    /// Model used for diagrams
    diagram: String,
    /// Attribution title sent with outline calls
    outline_title: Option<String>,
    /// Attribution title sent with diagram calls
    diagram_title: Option<String>,
}

impl ModelChoice {
    /// Creates a model choice without per-use-case titles.
    pub fn new(outline: impl Into<String>, diagram: impl Into<String>) -> Self {
        Self {
            outline: outline.into(),
            diagram: diagram.into(),
            outline_title: None,
            diagram_title: None,
        }
    }

    /// Sets the attribution title sent with each use case's calls.
    pub fn with_titles(mut self, outline: impl Into<String>, diagram: impl Into<String>) -> Self {
        self.outline_title = Some(outline.into());
        self.diagram_title = Some(diagram.into());
        self
    }

    /// The model for a use case.
    pub fn for_use_case(&self, use_case: UseCase) -> &str {
        match use_case {
            UseCase::Outline => &self.outline,
            UseCase::Diagram => &self.diagram,
        }
    }

    /// The attribution title for a use case, if one is set.
    pub fn title_for(&self, use_case: UseCase) -> Option<&str> {
        match use_case {
            UseCase::Outline => self.outline_title.as_deref(),
            UseCase::Diagram => self.diagram_title.as_deref(),
        }
    }
}

/// Validates, prompts, invokes, normalizes and shape-checks one request.
///
/// The pipeline holds only immutable configuration and a shared driver, so
/// one instance serves any number of concurrent requests. Every request
/// produces exactly one upstream call or none at all if validation fails.
#[derive(Clone)]
pub struct GenerationPipeline {
    driver: Arc<dyn CompletionDriver>,
    models: ModelChoice,
    invoker: ModelInvoker,
    policy: SlidePolicy,
}

impl GenerationPipeline {
    /// Creates a pipeline with the default timeout and the lenient slide policy.
    pub fn new(driver: Arc<dyn CompletionDriver>, models: ModelChoice) -> Self {
        Self {
            driver,
            models,
            invoker: ModelInvoker::default(),
            policy: SlidePolicy::default(),
        }
    }

    /// Sets the upper bound for the model call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.invoker = ModelInvoker::new(timeout);
        self
    }

    /// Sets how slide objects are checked.
    pub fn with_policy(mut self, policy: SlidePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured models.
    pub fn models(&self) -> &ModelChoice {
        &self.models
    }

    /// The configured slide policy.
    pub fn policy(&self) -> SlidePolicy {
        self.policy
    }

    /// The configured model-call timeout.
    pub fn timeout(&self) -> Duration {
        self.invoker.timeout()
    }

    /// Runs the pipeline on an untyped request body.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure. An invalid request never reaches
    /// the model.
    #[instrument(skip(self, raw), fields(use_case = %use_case))]
    pub async fn run(
        &self,
        use_case: UseCase,
        raw: &Value,
    ) -> Result<GenerationResult, PipelineError> {
        let request = validator::validate(use_case, raw).inspect_err(|e| {
            warn!(error = %e.kind, "Rejected generation request");
        })?;
        self.generate(&request).await
    }

    /// Runs the pipeline on an already-validated request.
    #[instrument(skip(self, request), fields(use_case = %request.use_case()))]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, PipelineError> {
        let prompt = prompt::build_prompt(request);
        let model = self.models.for_use_case(request.use_case());
        let title = self.models.title_for(request.use_case());
        debug!(
            model = %model,
            system_chars = prompt.system_instruction().len(),
            "Prompt built"
        );

        let raw = self
            .invoker
            .invoke(self.driver.as_ref(), &prompt, model, title)
            .await?;

        let normalized = normalizer::normalize(raw.text());
        let shape = request.expected_shape(self.policy);

        match result::validate_output(&normalized, shape) {
            Ok(result) => {
                info!(model = %raw.model(), "Generation succeeded");
                Ok(result)
            }
            Err(e) => {
                match &e.kind {
                    PipelineErrorKind::MalformedOutput { reason, .. } => error!(
                        model = %raw.model(),
                        reason = %reason,
                        raw = %raw.text(),
                        "Model output could not be parsed"
                    ),
                    kind => error!(
                        model = %raw.model(),
                        error = %kind,
                        raw = %raw.text(),
                        "Model output has the wrong shape"
                    ),
                }
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("provider", &self.driver.provider_name())
            .field("models", &self.models)
            .field("invoker", &self.invoker)
            .field("policy", &self.policy)
            .finish()
    }
}
