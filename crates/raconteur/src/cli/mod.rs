//! Command-line interface module.
//!
//! Flags carry the generation parameters, `ask` is the one-shot trigger, and
//! `chat` submits a cycle per entered line.

mod commands;
mod output;
mod run;

pub use commands::{Cli, Commands};
pub use output::StdoutSink;
pub use run::{Settings, run};
