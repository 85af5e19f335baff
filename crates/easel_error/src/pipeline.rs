//! Generation pipeline error types.

use crate::RetryableError;

/// Message returned to callers when the upstream model could not be reached.
const UPSTREAM_PUBLIC_MESSAGE: &str = "Failed to reach the generation service";

/// Message returned to callers when the model answered with unusable text.
const MALFORMED_PUBLIC_MESSAGE: &str = "Failed to parse the generated output";

/// Failure conditions of the structured-generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The incoming request is malformed or out of range (caller's fault)
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// The model endpoint was unreachable, rejected the call, or timed out.
    ///
    /// The payload is a local diagnostic and is never returned to callers.
    #[display("Upstream failure: {}", _0)]
    UpstreamFailure(String),
    /// The model answered with text that is not in the expected encoding
    #[display("Malformed output: {}", reason)]
    MalformedOutput {
        /// Why the text could not be interpreted
        reason: String,
        /// The normalized text that failed to parse
        raw: String,
    },
    /// The output parsed but violates the count or field rules
    #[display("Shape mismatch: expected {}, got {}", expected, actual)]
    ShapeMismatch {
        /// Description of the expected shape
        expected: String,
        /// Description of what was received
        actual: String,
    },
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::ShapeMismatch {
///     expected: "4".to_string(),
///     actual: "5".to_string(),
/// });
/// assert!(format!("{}", err).contains("expected 4, got 5"));
/// assert_eq!(err.public_message(), "Shape mismatch: expected 4, got 5");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an [`PipelineErrorKind::InvalidRequest`] error.
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PipelineErrorKind::InvalidRequest(message.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PipelineErrorKind {
        &self.kind
    }

    /// Message that may be shown to an untrusted caller.
    ///
    /// Upstream diagnostics and raw model text are withheld.
    pub fn public_message(&self) -> String {
        match &self.kind {
            PipelineErrorKind::InvalidRequest(message) => message.clone(),
            PipelineErrorKind::UpstreamFailure(_) => UPSTREAM_PUBLIC_MESSAGE.to_string(),
            PipelineErrorKind::MalformedOutput { .. } => MALFORMED_PUBLIC_MESSAGE.to_string(),
            kind @ PipelineErrorKind::ShapeMismatch { .. } => kind.to_string(),
        }
    }

    /// The raw model text attached to this error, if any.
    pub fn raw_output(&self) -> Option<&str> {
        match &self.kind {
            PipelineErrorKind::MalformedOutput { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// True when the caller is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind, PipelineErrorKind::InvalidRequest(_))
    }

    /// Stable short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self.kind {
            PipelineErrorKind::InvalidRequest(_) => "invalid_request",
            PipelineErrorKind::UpstreamFailure(_) => "upstream_failure",
            PipelineErrorKind::MalformedOutput { .. } => "malformed_output",
            PipelineErrorKind::ShapeMismatch { .. } => "shape_mismatch",
        }
    }
}

impl From<PipelineErrorKind> for PipelineError {
    #[track_caller]
    fn from(kind: PipelineErrorKind) -> Self {
        Self::new(kind)
    }
}

impl RetryableError for PipelineError {
    fn is_retryable(&self) -> bool {
        matches!(self.kind, PipelineErrorKind::UpstreamFailure(_))
    }
}
