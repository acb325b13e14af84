//! The streaming chat client.

use crate::error::ClientError;
use crate::{ResponseSink, Utf8Decoder};
use futures_util::StreamExt;
use raconteur_core::{ChatRequest, Parameters};
use raconteur_error::{HttpError, StreamError};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, instrument};

/// Endpoint path, resolved against the configured base URL.
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Placeholder shown between trigger and first response byte.
pub const THINKING_PLACEHOLDER: &str = "Thinking...";

/// Prefix of the message that replaces all output when a cycle fails.
pub const ERROR_PREFIX: &str = "Sorry, an error happened. Please try again later. \n\n ";

/// How one request cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleOutcome {
    /// Empty message; no request sent, sink untouched.
    Skipped,
    /// A cycle was already in flight; trigger ignored, sink untouched.
    Busy,
    /// Stream drained to completion.
    Done,
    /// The cycle failed; the sink shows the error message.
    Failed,
}

/// Orchestrates one request/response cycle against a chat-completion endpoint.
///
/// The client owns no display state: rendering goes through the
/// [`ResponseSink`] passed to [`submit`](Self::submit). Clones share the
/// in-flight guard, so concurrent triggers across clones are still ignored
/// while a cycle is active.
///
/// # Examples
///
/// ```no_run
/// use raconteur_client::{BufferSink, StreamingChatClient};
/// use raconteur_core::Parameters;
///
/// # async fn demo() {
/// let client = StreamingChatClient::new("http://localhost:8080");
/// let params = Parameters::builder()
///     .model("anthropic.claude-3-5-sonnet-20240620-v1:0")
///     .system("You are a storyteller.")
///     .user_message("Tell me a short story.")
///     .max_tokens("1024")
///     .temperature("0.5")
///     .build()
///     .expect("valid parameters");
///
/// let mut sink = BufferSink::new();
/// client.submit(&params, &mut sink).await;
/// println!("{}", sink.contents());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StreamingChatClient {
    client: Client,
    base_url: String,
    in_flight: Arc<AtomicBool>,
}

impl StreamingChatClient {
    /// Creates a client for the endpoint at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(url = %base_url, "Created streaming chat client");
        Self {
            client: Client::new(),
            base_url,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the base URL the completions path resolves against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs one request/response cycle, rendering into `sink`.
    ///
    /// An empty or whitespace-only message skips silently. A trigger while
    /// another cycle is active is ignored. Every failure path replaces the
    /// sink content with [`ERROR_PREFIX`] followed by the error detail; this
    /// method itself never returns an error.
    #[instrument(skip(self, params, sink), fields(model = %params.model()))]
    pub async fn submit<S: ResponseSink>(&self, params: &Parameters, sink: &mut S) -> CycleOutcome {
        if params.is_message_empty() {
            debug!("Empty message, skipping cycle");
            return CycleOutcome::Skipped;
        }
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("Cycle already in flight, ignoring trigger");
            return CycleOutcome::Busy;
        }

        let outcome = self.run_cycle(params, sink).await;
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    async fn run_cycle<S: ResponseSink>(&self, params: &Parameters, sink: &mut S) -> CycleOutcome {
        match self.try_cycle(params, sink).await {
            Ok(()) => {
                debug!("Stream complete");
                CycleOutcome::Done
            }
            Err(e) => {
                error!(error = %e, "Cycle failed");
                sink.fail(&format!("{ERROR_PREFIX}{e}"));
                CycleOutcome::Failed
            }
        }
    }

    async fn try_cycle<S: ResponseSink>(
        &self,
        params: &Parameters,
        sink: &mut S,
    ) -> Result<(), ClientError> {
        // Validation happens before the placeholder: an invalid parameter
        // set never shows "Thinking...".
        let request = params.parse()?;
        sink.reset(THINKING_PLACEHOLDER);
        self.stream_into(&request, sink).await
    }

    async fn stream_into<S: ResponseSink>(
        &self,
        request: &ChatRequest,
        sink: &mut S,
    ) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);
        debug!(url = %url, "Sending request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {e}")))?;

        // The status is deliberately not inspected: an error-status body
        // streams into the sink like any other response.
        debug!(status = %response.status(), "Response headers received");
        sink.clear();

        let mut stream = response.bytes_stream();
        let mut decoder = Utf8Decoder::new();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| StreamError::new(format!("Read failed: {e}")))?;
            debug!(len = bytes.len(), "Chunk received");
            let text = decoder.decode(&bytes);
            if !text.is_empty() {
                sink.append(&text);
            }
        }
        let tail = decoder.flush();
        if !tail.is_empty() {
            sink.append(&tail);
        }

        Ok(())
    }
}
