//! Message types for the chat payload.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single message in the request payload.
///
/// # Examples
///
/// ```
/// use raconteur_core::{ChatMessage, Role};
///
/// let message = ChatMessage::new(Role::User, "Hello!");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Hello!");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), pattern = "owned")]
pub struct ChatMessage {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    content: String,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Returns a builder for constructing a ChatMessage.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}
