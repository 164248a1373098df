//! Companion Bot Entry Point
//!
//! Long-polls the Telegram Bot API and greets users with a link to the
//! tactical board. Independent of the API server.

use anyhow::Context;
use companion::{Companion, CompanionConfig};
use platform::telegram::TelegramClient;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bot=info,companion=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(token) = env_var("BOT_TOKEN") else {
        tracing::warn!("BOT_TOKEN not set, companion bot disabled");
        return Ok(());
    };

    let config = match env_var("WEB_APP_URL") {
        Some(url) => CompanionConfig::with_web_app_url(url),
        None => CompanionConfig::default(),
    };
    tracing::info!(web_app_url = %config.web_app_url, "Starting companion bot");

    let client = TelegramClient::new(token, config.poll_timeout)
        .context("failed to build Bot API client")?;

    let mut companion = Companion::new(Arc::new(client), Arc::new(config));
    companion
        .launch()
        .await
        .context("failed to reach the Bot API (check BOT_TOKEN)")?;

    companion.run(platform::shutdown::shutdown_signal()).await;

    Ok(())
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
