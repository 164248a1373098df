//! Application Configuration

use crate::domain::greeting::Greeting;
use std::time::Duration;

/// Launch URL of the front-end mini app
pub const DEFAULT_WEB_APP_URL: &str = "https://t.me/ComboBoardBot/board";

/// Companion configuration
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// Where the greeting button points
    pub web_app_url: String,
    /// Greeting message text
    pub greeting_text: String,
    /// Label of the greeting button
    pub button_label: String,
    /// Description shown next to the start command in the menu
    pub command_description: String,
    /// Long-poll timeout for fetching updates
    pub poll_timeout: Duration,
    /// Pause after a failed fetch before polling again
    pub retry_delay: Duration,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            web_app_url: DEFAULT_WEB_APP_URL.to_string(),
            greeting_text: "Hi team! 🏀\n\nOpen the tactical board mini app right here:"
                .to_string(),
            button_label: "🏀 Open board".to_string(),
            command_description: "🏀 Open the tactical board".to_string(),
            poll_timeout: Duration::from_secs(30),
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl CompanionConfig {
    /// Default config pointing the button at `web_app_url`
    pub fn with_web_app_url(web_app_url: impl Into<String>) -> Self {
        Self {
            web_app_url: web_app_url.into(),
            ..Default::default()
        }
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::new(&self.greeting_text, &self.button_label, &self.web_app_url)
    }
}
