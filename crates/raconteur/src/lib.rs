//! Raconteur: a streaming chat-completion client.
//!
//! Collects chat parameters, posts one streaming request to
//! `/v1/chat/completions`, and renders the reply incrementally through an
//! injected sink. This facade re-exports the library surface and hosts the
//! CLI front-end.

pub mod cli;

pub use raconteur_client::{
    BufferSink, COMPLETIONS_PATH, ClientError, CycleOutcome, ERROR_PREFIX, ResponseSink,
    StreamingChatClient, THINKING_PLACEHOLDER, Utf8Decoder,
};
pub use raconteur_core::{ChatMessage, ChatRequest, ClientConfig, Parameters, Role};
pub use raconteur_error::{ConfigError, HttpError, InputError, StreamError};
