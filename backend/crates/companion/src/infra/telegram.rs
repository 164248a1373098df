//! Telegram Gateway
//!
//! `ChatGateway` over the Bot API client from the platform crate.

use crate::domain::gateway::ChatGateway;
use crate::error::CompanionResult;
use platform::telegram::{BotCommand, SendMessage, TelegramClient, Update};
use std::time::Duration;

impl ChatGateway for TelegramClient {
    async fn bot_username(&self) -> CompanionResult<Option<String>> {
        Ok(self.get_me().await?.username)
    }

    async fn fetch_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> CompanionResult<Vec<Update>> {
        Ok(self.get_updates(offset, timeout).await?)
    }

    async fn send_message(&self, message: &SendMessage) -> CompanionResult<()> {
        TelegramClient::send_message(self, message).await?;
        Ok(())
    }

    async fn set_commands(&self, commands: &[BotCommand]) -> CompanionResult<()> {
        let accepted = self.set_my_commands(commands).await?;
        if !accepted {
            tracing::warn!("Bot API did not accept the command menu");
        }
        Ok(())
    }
}
