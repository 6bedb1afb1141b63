//! Emergency alerts for the walker's current location
//!
//! Delivery is hidden behind [`AlertDispatcher`]; the only shipped
//! implementation posts to the Telegram Bot API.

mod config;
mod message;
mod telegram;

pub use config::AlertConfig;
pub use message::compose_message;
pub use telegram::TelegramDispatcher;

/// Delivers an alert naming a person and a location.
///
/// Implementations never fail loudly: every delivery problem is reported
/// as `false`.
pub trait AlertDispatcher {
    fn send(&self, name: &str, location: &str) -> bool;
}
