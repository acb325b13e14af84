//! Cycle-level error type.

use raconteur_error::{HttpError, InputError, StreamError};

/// Any failure that can end a request cycle.
///
/// All variants funnel to the same sink-level handler; the distinction only
/// matters for logging and tests.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Request construction or transmission failed.
    Http(HttpError),
    /// The response body failed mid-stream.
    Stream(StreamError),
    /// A user-supplied parameter failed validation.
    Input(InputError),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(e) => e.fmt(f),
            ClientError::Stream(e) => e.fmt(f),
            ClientError::Input(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Stream(e) => Some(e),
            ClientError::Input(e) => Some(e),
        }
    }
}

impl From<HttpError> for ClientError {
    fn from(e: HttpError) -> Self {
        ClientError::Http(e)
    }
}

impl From<StreamError> for ClientError {
    fn from(e: StreamError) -> Self {
        ClientError::Stream(e)
    }
}

impl From<InputError> for ClientError {
    fn from(e: InputError) -> Self {
        ClientError::Input(e)
    }
}
