//! Display sink abstraction.
//!
//! The display surface is a single mutable text area. The trait captures its
//! four operations and lets callers inject any rendering target, so the
//! client never touches a concrete UI.

/// Rendering target for one request cycle.
///
/// Call order within a cycle: `reset` once before any network activity,
/// `clear` once when response headers arrive, `append` per decoded chunk,
/// or `fail` once to replace everything with an error message.
pub trait ResponseSink {
    /// Replace the current content with a placeholder before the request goes out.
    fn reset(&mut self, placeholder: &str);

    /// Drop the placeholder; streaming output is about to begin.
    fn clear(&mut self);

    /// Append one decoded chunk in arrival order.
    fn append(&mut self, chunk: &str);

    /// Replace all content, including any partial output, with an error message.
    fn fail(&mut self, message: &str);
}

/// String-backed sink.
///
/// The library default and the test workhorse; the final buffer is exactly
/// what a display element would show.
///
/// # Examples
///
/// ```
/// use raconteur_client::{BufferSink, ResponseSink};
///
/// let mut sink = BufferSink::new();
/// sink.reset("Thinking...");
/// sink.clear();
/// sink.append("Hello, ");
/// sink.append("world!");
/// assert_eq!(sink.contents(), "Hello, world!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSink {
    contents: String,
}

impl BufferSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Consumes the sink, returning the final buffer.
    pub fn into_string(self) -> String {
        self.contents
    }
}

impl ResponseSink for BufferSink {
    fn reset(&mut self, placeholder: &str) {
        self.contents.clear();
        self.contents.push_str(placeholder);
    }

    fn clear(&mut self) {
        self.contents.clear();
    }

    fn append(&mut self, chunk: &str) {
        self.contents.push_str(chunk);
    }

    fn fail(&mut self, message: &str) {
        self.contents.clear();
        self.contents.push_str(message);
    }
}
