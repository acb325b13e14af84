//! Client configuration with file and environment layering.

use derive_getters::Getters;
use raconteur_error::ConfigError;
use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_model() -> String {
    "anthropic.claude-3-5-sonnet-20240620-v1:0".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.5
}

/// Configuration for the streaming chat client.
///
/// Sources are layered lowest to highest precedence: built-in defaults, the
/// user config file (`$XDG_CONFIG_HOME/raconteur/config.toml`), a local
/// `raconteur.toml`, then `RACONTEUR_`-prefixed environment variables.
/// The generation defaults mirror the endpoint's own server-side defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ClientConfig {
    /// Origin the completions path is resolved against
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Default model identifier
    #[serde(default = "default_model")]
    model: String,
    /// Default system prompt
    #[serde(default)]
    system: String,
    /// Default maximum tokens
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    /// Default sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            system: String::new(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from files and the environment.
    ///
    /// Missing files are fine; every field has a default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a file is malformed or a value fails to
    /// deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("raconteur").join("config.toml");
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder
            .add_source(config::File::with_name("raconteur").required(false))
            .add_source(config::Environment::with_prefix("RACONTEUR").try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}
