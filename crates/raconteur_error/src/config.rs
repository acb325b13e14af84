//! Configuration error types.

/// Failure loading or merging client configuration.
///
/// Raised when a config file is malformed or a layered value does not
/// deserialize into the expected type. Carries the source location of its
/// construction.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What failed to load or parse
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use raconteur_error::ConfigError;
    ///
    /// let err = ConfigError::new("raconteur.toml is not valid TOML");
    /// assert!(err.message.contains("raconteur.toml"));
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_message_and_location() {
        let err = ConfigError::new("max_tokens must be an integer");
        let text = err.to_string();
        assert!(text.starts_with("Config Error: max_tokens must be an integer"));
        assert!(text.contains("config.rs"));
    }
}
