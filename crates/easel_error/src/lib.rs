//! Error types for the Easel structured-generation service.
//!
//! Every error records the source location where it was constructed, which
//! keeps log lines actionable without carrying a backtrace across crates.

mod config;
mod pipeline;
mod retry;
mod server;

pub use config::ConfigError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use retry::RetryableError;
pub use server::{ServerError, ServerErrorKind};

/// Umbrella error for the Easel binaries.
///
/// # Examples
///
/// ```
/// use easel_error::{ConfigError, EaselError};
///
/// let err: EaselError = ConfigError::new("upstream.api_key is required").into();
/// assert!(format!("{}", err).contains("api_key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum EaselError {
    /// Pipeline failure
    #[display("{}", _0)]
    Pipeline(PipelineError),
    /// Configuration failure
    #[display("{}", _0)]
    Config(ConfigError),
    /// HTTP server failure
    #[display("{}", _0)]
    Server(ServerError),
}

/// Result alias used by the binaries.
pub type EaselResult<T> = Result<T, EaselError>;
