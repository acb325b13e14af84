//! Error types for the Raconteur streaming chat client.
//!
//! Each error domain lives in its own module. All errors capture the source
//! location of their construction via `#[track_caller]`.

mod config;
mod http;
mod input;
mod stream;

pub use config::ConfigError;
pub use http::HttpError;
pub use input::InputError;
pub use stream::StreamError;
