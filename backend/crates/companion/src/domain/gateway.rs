//! Chat Gateway Trait
//!
//! Interface to the chat platform. Implementation is in the infra layer.

use crate::error::CompanionResult;
use platform::telegram::{BotCommand, SendMessage, Update};
use std::time::Duration;

#[trait_variant::make(ChatGateway: Send)]
pub trait LocalChatGateway {
    /// The bot's own username, if it has one
    async fn bot_username(&self) -> CompanionResult<Option<String>>;

    /// Wait up to `timeout` for updates with `update_id >= offset`
    async fn fetch_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> CompanionResult<Vec<Update>>;

    async fn send_message(&self, message: &SendMessage) -> CompanionResult<()>;

    /// Replace the command menu
    async fn set_commands(&self, commands: &[BotCommand]) -> CompanionResult<()>;
}
