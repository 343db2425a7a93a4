use crate::error::ConfigError;
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Map centre used before the user picks a place or shares their position
pub const DEFAULT_CENTRE: Coordinate = Coordinate::new(51.505, -0.09);

pub const DEFAULT_BOT_NAME: &str = "ChambaBot";

/// Host configuration for the listing pages and the assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the marketplace REST API
    pub api_base_url: String,
    /// Name shown in the assistant header
    pub bot_name: String,
    /// First bot message of every fresh conversation
    pub greeting: String,
    pub default_location: Coordinate,
}

/// Greeting used unless one is configured explicitly
pub fn stock_greeting(bot_name: &str) -> String {
    format!("¡Hola! Soy {bot_name}, ¿cómo puedo ayudarte hoy?")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            bot_name: DEFAULT_BOT_NAME.to_string(),
            greeting: stock_greeting(DEFAULT_BOT_NAME),
            default_location: DEFAULT_CENTRE,
        }
    }
}

impl AppConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_json::from_str(&raw)?;
        if config.greeting == stock_greeting(DEFAULT_BOT_NAME) {
            config.greeting = stock_greeting(&config.bot_name);
        }
        debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply `CHAMBA_API_URL` and `CHAMBA_BOT_NAME` when set.
    /// A stock greeting follows the new bot name; a custom one is kept.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("CHAMBA_API_URL").filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
        if let Some(name) = lookup("CHAMBA_BOT_NAME").filter(|v| !v.is_empty()) {
            if self.greeting == stock_greeting(&self.bot_name) {
                self.greeting = stock_greeting(&name);
            }
            self.bot_name = name;
        }
        self
    }
}
