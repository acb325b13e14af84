//! Command handlers.

use crate::cli::{Cli, Commands, StdoutSink};
use raconteur_client::{CycleOutcome, StreamingChatClient};
use raconteur_core::{ClientConfig, Parameters};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Resolved generation settings: CLI flags layered over configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    base_url: String,
    model: String,
    system: String,
    max_tokens: String,
    temperature: String,
}

impl Settings {
    /// Merges CLI overrides onto the loaded configuration.
    pub fn resolve(cli: &Cli, config: &ClientConfig) -> Self {
        Self {
            base_url: cli
                .base_url
                .clone()
                .unwrap_or_else(|| config.base_url().clone()),
            model: cli.model.clone().unwrap_or_else(|| config.model().clone()),
            system: cli
                .system
                .clone()
                .unwrap_or_else(|| config.system().clone()),
            max_tokens: cli
                .max_tokens
                .clone()
                .unwrap_or_else(|| config.max_tokens().to_string()),
            temperature: cli
                .temperature
                .clone()
                .unwrap_or_else(|| config.temperature().to_string()),
        }
    }

    /// Builds the per-cycle parameter set for one message.
    ///
    /// Both triggers funnel through here, so identical flag values and
    /// message text always produce the identical payload.
    pub fn parameters(&self, message: impl Into<String>) -> anyhow::Result<Parameters> {
        Ok(Parameters::builder()
            .model(self.model.clone())
            .system(self.system.clone())
            .user_message(message)
            .max_tokens(self.max_tokens.clone())
            .temperature(self.temperature.clone())
            .build()?)
    }
}

/// Entry point for the parsed CLI.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::load()?;
    let settings = Settings::resolve(&cli, &config);
    let client = StreamingChatClient::new(settings.base_url.clone());

    match &cli.command {
        Commands::Ask { message } => handle_ask(&client, &settings, message).await,
        Commands::Chat => handle_chat(&client, &settings).await,
    }
}

async fn handle_ask(
    client: &StreamingChatClient,
    settings: &Settings,
    message: &str,
) -> anyhow::Result<()> {
    let params = settings.parameters(message)?;
    let mut sink = StdoutSink::new();
    let outcome = client.submit(&params, &mut sink).await;
    debug!(?outcome, "Cycle finished");
    if outcome != CycleOutcome::Skipped {
        sink.finish();
    }
    Ok(())
}

async fn handle_chat(client: &StreamingChatClient, settings: &Settings) -> anyhow::Result<()> {
    eprintln!("Type a message and press Enter; Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let params = settings.parameters(line)?;
        let mut sink = StdoutSink::new();
        let outcome = client.submit(&params, &mut sink).await;
        debug!(?outcome, "Cycle finished");
        if outcome != CycleOutcome::Skipped {
            sink.finish();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(command: Commands) -> Cli {
        Cli {
            model: Some("cli-model".to_string()),
            system: None,
            max_tokens: Some("99".to_string()),
            temperature: None,
            base_url: None,
            command,
        }
    }

    #[test]
    fn cli_flags_override_config_defaults() {
        let config = ClientConfig::default();
        let settings = Settings::resolve(
            &cli(Commands::Ask {
                message: "hi".to_string(),
            }),
            &config,
        );

        assert_eq!(settings.model, "cli-model");
        assert_eq!(settings.max_tokens, "99");
        // Unset flags fall back to configuration.
        assert_eq!(&settings.base_url, config.base_url());
        assert_eq!(settings.temperature, config.temperature().to_string());
    }

    #[test]
    fn both_triggers_build_identical_parameters() {
        let config = ClientConfig::default();
        let ask = Settings::resolve(
            &cli(Commands::Ask {
                message: "same".to_string(),
            }),
            &config,
        );
        let chat = Settings::resolve(&cli(Commands::Chat), &config);

        let from_ask = ask.parameters("same message").expect("valid");
        let from_chat = chat.parameters("same message").expect("valid");
        assert_eq!(from_ask, from_chat);
    }
}
