//! Greeting
//!
//! The single reply the companion knows how to send.

use platform::telegram::{BotCommand, InlineKeyboardMarkup, SendMessage};

/// Command that triggers the greeting, without the leading slash
pub const START_COMMAND: &str = "start";

/// Static greeting with one button linking to the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub text: String,
    pub button_label: String,
    pub url: String,
}

impl Greeting {
    pub fn new(
        text: impl Into<String>,
        button_label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            button_label: button_label.into(),
            url: url.into(),
        }
    }

    /// The reply for `chat_id`
    pub fn reply_to(&self, chat_id: i64) -> SendMessage {
        SendMessage {
            chat_id,
            text: self.text.clone(),
            reply_markup: Some(InlineKeyboardMarkup::single_url_button(
                &self.button_label,
                &self.url,
            )),
        }
    }
}

/// Command-menu entry for the start command
pub fn start_command_entry(description: impl Into<String>) -> BotCommand {
    BotCommand {
        command: START_COMMAND.to_string(),
        description: description.into(),
    }
}

/// Whether `text` invokes the start command
///
/// Accepts `/start`, `/start <payload>` and `/start@<bot>`. The `@<bot>`
/// form only matches when it names this bot (case-insensitive), or when the
/// bot's own username is unknown.
pub fn is_start_command(text: &str, bot_username: Option<&str>) -> bool {
    let Some(first) = text.split_whitespace().next() else {
        return false;
    };
    let Some(command) = first.strip_prefix('/') else {
        return false;
    };

    match command.split_once('@') {
        None => command == START_COMMAND,
        Some((name, target)) => {
            name == START_COMMAND
                && bot_username.is_none_or(|own| own.eq_ignore_ascii_case(target))
        }
    }
}
