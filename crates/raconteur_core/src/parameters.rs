//! Raw user-supplied parameters for one request cycle.

use crate::{ChatMessage, ChatRequest, Role};
use raconteur_error::InputError;

/// The five values collected from the user before a cycle starts.
///
/// Numeric fields are kept as the raw strings the user typed; [`Parameters::parse`]
/// is where they become numbers. A fresh `Parameters` is built for every
/// trigger and discarded once the payload exists.
///
/// # Examples
///
/// ```
/// use raconteur_core::Parameters;
///
/// let params = Parameters::builder()
///     .model("test-model")
///     .system("Be terse.")
///     .user_message("Tell me a story.")
///     .max_tokens("512")
///     .temperature("0.5")
///     .build()
///     .expect("valid parameters");
///
/// let request = params.parse().expect("numeric fields parse");
/// assert_eq!(*request.max_tokens(), 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct Parameters {
    /// Model identifier
    model: String,
    /// System prompt
    system: String,
    /// The user's message, as typed
    user_message: String,
    /// Maximum tokens, unparsed
    max_tokens: String,
    /// Temperature, unparsed
    temperature: String,
}

impl Parameters {
    /// Returns a builder for constructing Parameters.
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }

    /// True when the message is empty or whitespace-only.
    ///
    /// An empty message is a silent skip, not an error: the cycle never
    /// starts and nothing is rendered.
    pub fn is_message_empty(&self) -> bool {
        self.user_message.trim().is_empty()
    }

    /// Validates the numeric fields and builds the wire payload.
    ///
    /// The message content is forwarded as typed, untrimmed; trimming only
    /// applies to the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when max tokens is not an unsigned integer or
    /// temperature is not a float.
    pub fn parse(&self) -> Result<ChatRequest, InputError> {
        let max_tokens: u32 = self.max_tokens.trim().parse().map_err(|_| {
            InputError::new(format!("max tokens is not an integer: '{}'", self.max_tokens))
        })?;
        let temperature: f32 = self.temperature.trim().parse().map_err(|_| {
            InputError::new(format!("temperature is not a number: '{}'", self.temperature))
        })?;

        ChatRequest::builder()
            .model(self.model.clone())
            .system(self.system.clone())
            .messages(vec![ChatMessage::new(Role::User, self.user_message.clone())])
            .max_tokens(max_tokens)
            .temperature(temperature)
            .build()
            .map_err(|e| InputError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(message: &str, max_tokens: &str, temperature: &str) -> Parameters {
        Parameters::builder()
            .model("test-model")
            .system("")
            .user_message(message)
            .max_tokens(max_tokens)
            .temperature(temperature)
            .build()
            .expect("valid parameters")
    }

    #[test]
    fn whitespace_only_message_is_empty() {
        assert!(params("   \t\n", "100", "0.5").is_message_empty());
        assert!(params("", "100", "0.5").is_message_empty());
        assert!(!params("hi", "100", "0.5").is_message_empty());
    }

    #[test]
    fn parse_builds_single_user_turn() {
        let request = params("Tell me a story.", "1024", "0.5")
            .parse()
            .expect("valid numerics");

        assert_eq!(request.messages().len(), 1);
        assert_eq!(*request.messages()[0].role(), Role::User);
        assert_eq!(request.messages()[0].content(), "Tell me a story.");
        assert_eq!(*request.max_tokens(), 1024);
        assert!((*request.temperature() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_preserves_surrounding_whitespace_in_content() {
        let request = params("  padded  ", "10", "0.1").parse().expect("parses");
        assert_eq!(request.messages()[0].content(), "  padded  ");
    }

    #[test]
    fn non_numeric_max_tokens_is_an_input_error() {
        let err = params("hi", "lots", "0.5").parse().expect_err("must fail");
        assert!(err.message.contains("max tokens"));
        assert!(err.message.contains("lots"));
    }

    #[test]
    fn non_numeric_temperature_is_an_input_error() {
        let err = params("hi", "100", "warm").parse().expect_err("must fail");
        assert!(err.message.contains("temperature"));
    }
}
