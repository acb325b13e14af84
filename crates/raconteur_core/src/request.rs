//! The chat-completion request payload.

use crate::ChatMessage;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wire payload for `POST /v1/chat/completions`.
///
/// Created fresh for each cycle, serialized, sent, and discarded. The
/// `stream` flag is always true; this client only speaks the streaming
/// variant of the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// System prompt (sent even when empty, matching the endpoint contract)
    system: String,
    /// Message list; a single user turn in this client
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Streaming flag, always true
    #[builder(default = "true")]
    stream: bool,
}

impl ChatRequest {
    /// Creates a builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}
