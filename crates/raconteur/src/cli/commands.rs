//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Streaming chat-completion client.
#[derive(Debug, Parser)]
#[command(name = "raconteur", version, about)]
pub struct Cli {
    /// Model identifier (defaults from configuration)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// System prompt
    #[arg(long, global = true)]
    pub system: Option<String>,

    /// Maximum tokens to generate
    #[arg(long, global = true)]
    pub max_tokens: Option<String>,

    /// Sampling temperature
    #[arg(long, global = true)]
    pub temperature: Option<String>,

    /// Endpoint origin, e.g. http://localhost:8080
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send one message and stream the reply to stdout.
    Ask {
        /// The user message
        message: String,
    },
    /// Interactive session; every non-empty line submits a message.
    Chat,
}
