//! HTTP server error types.

/// Server error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Server configuration is unusable
    #[display("Configuration error: {}", _0)]
    Configuration(String),
    /// Failed to bind the listening socket
    #[display("Failed to bind {}: {}", address, message)]
    Bind {
        /// Address we tried to bind
        address: String,
        /// Underlying I/O message
        message: String,
    },
    /// The server loop terminated with an error
    #[display("Server error: {}", _0)]
    Serve(String),
}

/// Server error with location tracking.
///
/// # Examples
///
/// ```
/// use easel_error::{ServerError, ServerErrorKind};
///
/// let err = ServerError::new(ServerErrorKind::Serve("connection reset".to_string()));
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
