//! Core data types for the Raconteur streaming chat client.
//!
//! This crate provides the request payload, the raw parameter set collected
//! from the user, and the client configuration.

mod config;
mod message;
mod parameters;
mod request;
mod role;

pub use config::ClientConfig;
pub use message::{ChatMessage, ChatMessageBuilder};
pub use parameters::{Parameters, ParametersBuilder};
pub use request::{ChatRequest, ChatRequestBuilder};
pub use role::Role;
