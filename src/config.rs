//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Daemon configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bot identity and trigger configuration.
    pub bot: BotConfig,
    /// Upstream service endpoints.
    #[serde(default)]
    pub services: ServicesConfig,
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name (used in logs).
    pub name: String,
    /// The bot's own user id; messages from this author are never parsed.
    pub user_id: u64,
    /// Command prefix (e.g., "!").
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

/// Upstream service endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Translation endpoint.
    #[serde(default = "default_translate_url")]
    pub translate_url: String,
    /// Dictionary endpoint; `{lang}` and `{word}` are substituted.
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,
    /// Instant-answer summary endpoint.
    #[serde(default = "default_summary_url")]
    pub summary_url: String,
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_translate_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_dictionary_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/{lang}/{word}".to_string()
}

fn default_summary_url() -> String {
    "https://api.duckduckgo.com/".to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            translate_url: default_translate_url(),
            dictionary_url: default_dictionary_url(),
            summary_url: default_summary_url(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: Config = toml::from_str(
            r#"
            [bot]
            name = "quip"
            user_id = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.bot.prefix, "!");
        assert_eq!(config.services.summary_url, "https://api.duckduckgo.com/");
    }

    #[test]
    fn test_explicit_prefix() {
        let config: Config = toml::from_str(
            r#"
            [bot]
            name = "quip"
            user_id = 42
            prefix = "?"
            "#,
        )
        .unwrap();

        assert_eq!(config.bot.prefix, "?");
    }
}
