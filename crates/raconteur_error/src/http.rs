//! Transport error types.

/// Failure sending the completion request or receiving its headers.
///
/// Raised before any response byte arrives: connection refused, DNS failure,
/// TLS trouble, or a malformed base URL. Carries the source location of its
/// construction.
#[derive(Debug, Clone)]
pub struct HttpError {
    /// What went wrong on the wire
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use raconteur_error::HttpError;
    ///
    /// let err = HttpError::new("request to http://localhost:8080/v1/chat/completions failed");
    /// assert!(err.message.contains("/v1/chat/completions"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transport Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for HttpError {}
