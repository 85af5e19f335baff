//! Retry classification for errors.

/// Trait for errors that support retry logic.
///
/// The generation pipeline never retries on its own. Callers that wrap the
/// whole pipeline use this trait to decide whether another attempt makes sense.
///
/// # Examples
///
/// ```
/// use easel_error::{PipelineError, PipelineErrorKind, RetryableError};
///
/// let err = PipelineError::new(PipelineErrorKind::UpstreamFailure(
///     "request timed out".to_string(),
/// ));
/// assert!(err.is_retryable());
///
/// let err = PipelineError::new(PipelineErrorKind::InvalidRequest(
///     "too short".to_string(),
/// ));
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 3, 30)
    }
}
