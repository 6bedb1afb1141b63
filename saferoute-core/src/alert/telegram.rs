use chrono::Local;
use log::{info, warn};
use reqwest::blocking::Client;

use super::{AlertConfig, AlertDispatcher, compose_message};
use crate::Error;

/// Sends alerts through a Telegram bot
#[derive(Debug, Clone)]
pub struct TelegramDispatcher {
    client: Client,
    config: AlertConfig,
}

impl TelegramDispatcher {
    /// Builds the HTTP client with the configured timeout.
    ///
    /// Must not be called from inside an async runtime.
    pub fn new(config: AlertConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::NetworkError(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn deliver(&self, text: &str) -> Result<(), Error> {
        let response = self
            .client
            .post(self.config.send_message_url())
            .form(&[("chat_id", self.config.chat_id.as_str()), ("text", text)])
            .send()
            // reqwest errors carry the URL, which embeds the token
            .map_err(|e| Error::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::NetworkError(format!("Telegram responded with {status}")))
        }
    }
}

impl AlertDispatcher for TelegramDispatcher {
    fn send(&self, name: &str, location: &str) -> bool {
        let text = compose_message(name, location, Local::now().naive_local());
        match self.deliver(&text) {
            Ok(()) => {
                info!("Alert delivered for location {location:?}");
                true
            }
            Err(e) => {
                warn!("Alert for location {location:?} not sent: {e}");
                false
            }
        }
    }
}
