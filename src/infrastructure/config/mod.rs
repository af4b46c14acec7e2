//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub brain: BrainConfig,
    pub quotes: QuotesConfig,
    pub responder: ResponderConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BrainConfig {
    pub path: PathBuf,
    /// Write incoming messages to the brain. The file is never rotated.
    pub record: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuotesConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResponderConfig {
    /// Sent when the brain cannot produce a line; `None` stays silent
    pub fallback_reply: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub discord: Option<DiscordConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "GaleBot".to_string(),
                prefix: "!".to_string(),
            },
            brain: BrainConfig {
                path: PathBuf::from("brain.txt"),
                record: true,
            },
            quotes: QuotesConfig {
                path: PathBuf::from("quotes.json"),
            },
            responder: ResponderConfig {
                fallback_reply: Some("Error: Unable to fetch response".to_string()),
            },
            adapters: AdaptersConfig {
                discord: Some(DiscordConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig {
                    enabled: true,
                }),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue("bot.prefix must not be empty".to_string()));
        }
        if self.brain.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("brain.path".to_string()));
        }
        Ok(())
    }

    pub fn load_env() -> Self {
        Config::default().with_env_overrides()
    }

    /// Apply environment variables on top of this config
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var("DISCORD_TOKEN") {
            self.set_token(token);
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            if !prefix.trim().is_empty() {
                self.bot.prefix = prefix;
            }
        }

        if let Ok(path) = std::env::var("BRAIN_PATH") {
            self.brain.path = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("QUOTES_PATH") {
            self.quotes.path = PathBuf::from(path);
        }

        self
    }

    /// Set the Discord token and enable the adapter
    pub fn set_token(&mut self, token: impl Into<String>) {
        let discord = self.adapters.discord.get_or_insert(DiscordConfig {
            enabled: true,
            token: None,
        });
        discord.token = Some(token.into());
        discord.enabled = true;
    }

    pub fn console_enabled(&self) -> bool {
        self.adapters.console.as_ref().map(|c| c.enabled).unwrap_or(false)
    }

    /// Token of the Discord adapter when it is enabled
    pub fn discord_token(&self) -> Option<&str> {
        self.adapters
            .discord
            .as_ref()
            .filter(|d| d.enabled)
            .and_then(|d| d.token.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}
