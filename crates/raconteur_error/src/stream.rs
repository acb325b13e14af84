//! Streaming read error types.

/// Error raised while draining a streamed response body, with source location.
#[derive(Debug, Clone)]
pub struct StreamError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StreamError {
    /// Create a new StreamError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use raconteur_error::StreamError;
    ///
    /// let err = StreamError::new("Connection reset mid-stream");
    /// assert!(err.message.contains("mid-stream"));
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

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stream Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for StreamError {}
