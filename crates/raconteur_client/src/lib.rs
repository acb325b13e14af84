//! Streaming chat-completion client.
//!
//! One component, [`StreamingChatClient`], drives a single request/response
//! cycle: it validates the collected [`Parameters`](raconteur_core::Parameters),
//! posts the payload to `/v1/chat/completions`, and drains the response body
//! chunk by chunk into an injected [`ResponseSink`]. The body is treated as
//! raw text; there is no event framing to parse.

mod client;
mod decode;
mod error;
mod sink;

pub use client::{
    COMPLETIONS_PATH, CycleOutcome, ERROR_PREFIX, StreamingChatClient, THINKING_PLACEHOLDER,
};
pub use decode::Utf8Decoder;
pub use error::ClientError;
pub use sink::{BufferSink, ResponseSink};
