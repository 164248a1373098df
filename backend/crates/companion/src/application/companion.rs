//! Companion Use Case
//!
//! Registers the command menu, then long-polls for updates and answers every
//! start command with the greeting until shutdown.

use crate::application::config::CompanionConfig;
use crate::domain::gateway::ChatGateway;
use crate::domain::greeting::{Greeting, is_start_command, start_command_entry};
use crate::error::CompanionResult;
use platform::telegram::Update;
use std::future::Future;
use std::sync::Arc;

pub struct Companion<G>
where
    G: ChatGateway,
{
    gateway: Arc<G>,
    config: Arc<CompanionConfig>,
    greeting: Greeting,
    bot_username: Option<String>,
    /// Next `update_id` to ask for
    offset: Option<i64>,
}

impl<G> Companion<G>
where
    G: ChatGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<CompanionConfig>) -> Self {
        let greeting = config.greeting();
        Self {
            gateway,
            config,
            greeting,
            bot_username: None,
            offset: None,
        }
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    /// Identify the bot and register the start command in its menu
    ///
    /// Failing to identify the bot is fatal (usually a bad token); failing to
    /// set the menu is only logged.
    pub async fn launch(&mut self) -> CompanionResult<()> {
        self.bot_username = self.gateway.bot_username().await?;

        let commands = [start_command_entry(&self.config.command_description)];
        if let Err(e) = self.gateway.set_commands(&commands).await {
            tracing::warn!(error = %e, "Failed to register command menu");
        }

        tracing::info!(
            bot = self.bot_username.as_deref().unwrap_or("<unnamed>"),
            "Companion bot started"
        );
        Ok(())
    }

    /// Reply to `update` if it is a start command; returns whether it replied
    pub async fn handle_update(&self, update: &Update) -> CompanionResult<bool> {
        let Some(message) = &update.message else {
            return Ok(false);
        };
        let Some(text) = message.text.as_deref() else {
            return Ok(false);
        };
        if !is_start_command(text, self.bot_username.as_deref()) {
            return Ok(false);
        }

        self.gateway
            .send_message(&self.greeting.reply_to(message.chat.id))
            .await?;

        tracing::info!(
            chat_id = message.chat.id,
            update_id = update.update_id,
            "Sent greeting"
        );
        Ok(true)
    }

    /// Fetch one batch of updates and handle it; returns how many got a reply
    ///
    /// The offset moves past every fetched update before handling, so a
    /// failing update is not redelivered forever.
    pub async fn poll_once(&mut self) -> CompanionResult<usize> {
        let updates = self
            .gateway
            .fetch_updates(self.offset, self.config.poll_timeout)
            .await?;

        if let Some(last) = updates.iter().map(|u| u.update_id).max() {
            self.offset = Some(last + 1);
        }

        let mut replied = 0;
        for update in &updates {
            match self.handle_update(update).await {
                Ok(true) => replied += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(
                        update_id = update.update_id,
                        error = %e,
                        "Failed to handle update"
                    );
                }
            }
        }

        Ok(replied)
    }

    /// Poll until `shutdown` resolves
    ///
    /// Fetch failures are logged and retried after `retry_delay`.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                result = self.poll_once() => {
                    if let Err(e) = result {
                        tracing::warn!(
                            error = %e,
                            retry_in_ms = self.config.retry_delay.as_millis() as u64,
                            "Failed to fetch updates"
                        );
                        tokio::select! {
                            _ = &mut shutdown => break,
                            _ = tokio::time::sleep(self.config.retry_delay) => {}
                        }
                    }
                }
            }
        }

        tracing::info!("Companion bot stopped");
    }
}
