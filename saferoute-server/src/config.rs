//! Service configuration loaded from TOML
//!
//! ```toml
//! graph_path = "data/graph_data.csv"
//! bind = "127.0.0.1:8080"
//! user_name = "Ananya Sharma"
//!
//! [alert]
//! bot_token = "123456:ABC"
//! chat_id = "-100200300"
//! ```
//!
//! The bot token and chat id may instead come from `SAFEROUTE_BOT_TOKEN`
//! and `SAFEROUTE_CHAT_ID`, which take precedence over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use saferoute_core::alert::AlertConfig;
use serde::Deserialize;
use thiserror::Error;

pub const BOT_TOKEN_VAR: &str = "SAFEROUTE_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "SAFEROUTE_CHAT_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing alert setting `{0}` (set it in [alert] or the environment)")]
    MissingSecret(&'static str),
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub graph_path: PathBuf,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub alert: AlertSection,
}

/// `[alert]` table; secrets may be left out and supplied by the environment
#[derive(Debug, Default, Deserialize)]
pub struct AlertSection {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_user_name() -> String {
    "Anonymous".to_owned()
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl ServiceConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&raw)?;

        // Relative graph paths are resolved against the config file
        if config.graph_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.graph_path = dir.join(&config.graph_path);
            }
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Merges the `[alert]` table with secrets found through `lookup`,
    /// which wins over the file.
    pub fn resolve_alert<F>(&self, lookup: F) -> Result<AlertConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup(BOT_TOKEN_VAR)
            .or_else(|| self.alert.bot_token.clone())
            .ok_or(ConfigError::MissingSecret("bot_token"))?;
        let chat_id = lookup(CHAT_ID_VAR)
            .or_else(|| self.alert.chat_id.clone())
            .ok_or(ConfigError::MissingSecret("chat_id"))?;

        let mut config = AlertConfig::new(bot_token, chat_id);
        if let Some(api_base) = &self.alert.api_base {
            config.api_base.clone_from(api_base);
        }
        if let Some(timeout_secs) = self.alert.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        Ok(config)
    }
}
