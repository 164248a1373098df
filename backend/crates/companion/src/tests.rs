//! Unit tests for the companion crate

#[cfg(test)]
mod support {
    use crate::domain::gateway::ChatGateway;
    use crate::error::{CompanionError, CompanionResult};
    use platform::telegram::{
        BotCommand, Chat, Message, SendMessage, TelegramError, Update,
    };
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    pub fn gateway_error(description: &str) -> CompanionError {
        CompanionError::Gateway(TelegramError::Api {
            code: Some(502),
            description: description.to_string(),
        })
    }

    pub fn text_update(update_id: i64, chat_id: i64, text: &str) -> Update {
        Update {
            update_id,
            message: Some(Message {
                message_id: update_id * 10,
                chat: Chat { id: chat_id },
                from: None,
                text: Some(text.to_string()),
            }),
        }
    }

    pub fn empty_update(update_id: i64) -> Update {
        Update {
            update_id,
            message: None,
        }
    }

    /// Scripted gateway recording everything the companion sends
    #[derive(Default)]
    pub struct FakeGateway {
        pub username: Option<String>,
        pub fail_identify: bool,
        pub fail_commands: bool,
        /// Chats whose sends fail
        pub failing_chats: Vec<i64>,
        pub batches: Mutex<VecDeque<CompanionResult<Vec<Update>>>>,
        pub offsets: Mutex<Vec<Option<i64>>>,
        pub sent: Mutex<Vec<SendMessage>>,
        pub commands: Mutex<Vec<BotCommand>>,
    }

    impl FakeGateway {
        pub fn named(username: &str) -> Self {
            Self {
                username: Some(username.to_string()),
                ..Default::default()
            }
        }

        pub fn push_batch(&self, batch: CompanionResult<Vec<Update>>) {
            self.batches.lock().unwrap().push_back(batch);
        }

        pub fn sent(&self) -> Vec<SendMessage> {
            self.sent.lock().unwrap().clone()
        }

        pub fn offsets(&self) -> Vec<Option<i64>> {
            self.offsets.lock().unwrap().clone()
        }
    }

    impl ChatGateway for FakeGateway {
        async fn bot_username(&self) -> CompanionResult<Option<String>> {
            if self.fail_identify {
                return Err(gateway_error("Unauthorized"));
            }
            Ok(self.username.clone())
        }

        async fn fetch_updates(
            &self,
            offset: Option<i64>,
            _timeout: Duration,
        ) -> CompanionResult<Vec<Update>> {
            self.offsets.lock().unwrap().push(offset);
            let next = self.batches.lock().unwrap().pop_front();
            match next {
                Some(batch) => batch,
                None => {
                    // Stand-in for an idle long poll
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Ok(Vec::new())
                }
            }
        }

        async fn send_message(&self, message: &SendMessage) -> CompanionResult<()> {
            if self.failing_chats.contains(&message.chat_id) {
                return Err(gateway_error("chat not found"));
            }
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn set_commands(&self, commands: &[BotCommand]) -> CompanionResult<()> {
            if self.fail_commands {
                return Err(gateway_error("Too Many Requests"));
            }
            *self.commands.lock().unwrap() = commands.to_vec();
            Ok(())
        }
    }
}

#[cfg(test)]
mod greeting_tests {
    use crate::domain::greeting::*;

    #[test]
    fn test_plain_start_command() {
        assert!(is_start_command("/start", None));
        assert!(is_start_command("/start", Some("ComboBoardBot")));
        assert!(is_start_command("  /start  ", None));
    }

    #[test]
    fn test_start_with_payload() {
        assert!(is_start_command("/start team-42", Some("ComboBoardBot")));
    }

    #[test]
    fn test_start_addressed_to_bot() {
        assert!(is_start_command("/start@ComboBoardBot", Some("ComboBoardBot")));
        assert!(is_start_command("/start@comboboardbot", Some("ComboBoardBot")));
        assert!(is_start_command("/start@AnyBot", None));
        assert!(!is_start_command("/start@OtherBot", Some("ComboBoardBot")));
    }

    #[test]
    fn test_not_start_command() {
        assert!(!is_start_command("", None));
        assert!(!is_start_command("start", None));
        assert!(!is_start_command("/stop", None));
        assert!(!is_start_command("/started", None));
        assert!(!is_start_command("hello /start", None));
        assert!(!is_start_command("/help@ComboBoardBot", Some("ComboBoardBot")));
    }

    #[test]
    fn test_greeting_reply() {
        let greeting = Greeting::new("Hi", "Open", "https://example.com/board");
        let reply = greeting.reply_to(-42);

        assert_eq!(reply.chat_id, -42);
        assert_eq!(reply.text, "Hi");

        let keyboard = reply.reply_markup.unwrap().inline_keyboard;
        assert_eq!(keyboard.len(), 1);
        assert_eq!(keyboard[0].len(), 1);
        assert_eq!(keyboard[0][0].text, "Open");
        assert_eq!(keyboard[0][0].url, "https://example.com/board");
    }

    #[test]
    fn test_start_command_entry() {
        let entry = start_command_entry("Open the board");
        assert_eq!(entry.command, "start");
        assert_eq!(entry.description, "Open the board");
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = CompanionConfig::default();
        assert_eq!(config.web_app_url, DEFAULT_WEB_APP_URL);
        assert_eq!(config.poll_timeout, Duration::from_secs(30));
        assert!(!config.greeting_text.is_empty());
    }

    #[test]
    fn test_greeting_uses_web_app_url() {
        let config = CompanionConfig::with_web_app_url("https://board.example.com");
        let greeting = config.greeting();

        assert_eq!(greeting.url, "https://board.example.com");
        assert_eq!(greeting.text, config.greeting_text);
        assert_eq!(greeting.button_label, config.button_label);
    }
}

#[cfg(test)]
mod companion_tests {
    use super::support::*;
    use crate::application::companion::Companion;
    use crate::application::config::CompanionConfig;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_config() -> Arc<CompanionConfig> {
        Arc::new(CompanionConfig {
            poll_timeout: Duration::from_millis(10),
            retry_delay: Duration::from_millis(10),
            ..CompanionConfig::with_web_app_url("https://board.example.com")
        })
    }

    fn companion(gateway: &Arc<FakeGateway>) -> Companion<FakeGateway> {
        Companion::new(gateway.clone(), test_config())
    }

    #[tokio::test]
    async fn test_launch_registers_start_command() {
        let gateway = Arc::new(FakeGateway::named("ComboBoardBot"));
        let mut companion = companion(&gateway);

        companion.launch().await.unwrap();

        assert_eq!(companion.bot_username(), Some("ComboBoardBot"));
        let commands = gateway.commands.lock().unwrap().clone();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].command, "start");
    }

    #[tokio::test]
    async fn test_launch_tolerates_command_menu_failure() {
        let gateway = Arc::new(FakeGateway {
            fail_commands: true,
            ..FakeGateway::named("ComboBoardBot")
        });
        let mut companion = companion(&gateway);

        assert!(companion.launch().await.is_ok());
        assert!(gateway.commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_launch_fails_when_bot_cannot_be_identified() {
        let gateway = Arc::new(FakeGateway {
            fail_identify: true,
            ..Default::default()
        });
        let mut companion = companion(&gateway);

        assert!(companion.launch().await.is_err());
    }

    #[tokio::test]
    async fn test_handle_start_sends_greeting() {
        let gateway = Arc::new(FakeGateway::named("ComboBoardBot"));
        let mut companion = companion(&gateway);
        companion.launch().await.unwrap();

        let replied = companion
            .handle_update(&text_update(1, 77, "/start"))
            .await
            .unwrap();

        assert!(replied);
        let sent = gateway.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].chat_id, 77);
        let button = &sent[0].reply_markup.as_ref().unwrap().inline_keyboard[0][0];
        assert_eq!(button.url, "https://board.example.com");
    }

    #[tokio::test]
    async fn test_handle_ignores_other_messages() {
        let gateway = Arc::new(FakeGateway::named("ComboBoardBot"));
        let mut companion = companion(&gateway);
        companion.launch().await.unwrap();

        for update in [
            text_update(1, 77, "hello"),
            text_update(2, 77, "/start@OtherBot"),
            empty_update(3),
        ] {
            assert!(!companion.handle_update(&update).await.unwrap());
        }
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test]
    async fn test_poll_once_advances_offset() {
        let gateway = Arc::new(FakeGateway::named("ComboBoardBot"));
        gateway.push_batch(Ok(vec![
            text_update(10, 1, "/start"),
            text_update(12, 2, "hi"),
            text_update(11, 3, "/start payload"),
        ]));
        let mut companion = companion(&gateway);
        companion.launch().await.unwrap();

        assert_eq!(companion.offset(), None);
        let replied = companion.poll_once().await.unwrap();

        assert_eq!(replied, 2);
        assert_eq!(companion.offset(), Some(13));

        // Idle poll keeps the offset and asks from it
        assert_eq!(companion.poll_once().await.unwrap(), 0);
        assert_eq!(companion.offset(), Some(13));
        assert_eq!(gateway.offsets(), vec![None, Some(13)]);
    }

    #[tokio::test]
    async fn test_poll_once_skips_failed_reply() {
        let gateway = Arc::new(FakeGateway {
            failing_chats: vec![1],
            ..FakeGateway::named("ComboBoardBot")
        });
        gateway.push_batch(Ok(vec![
            text_update(5, 1, "/start"),
            text_update(6, 2, "/start"),
        ]));
        let mut companion = companion(&gateway);

        let replied = companion.poll_once().await.unwrap();

        assert_eq!(replied, 1);
        assert_eq!(companion.offset(), Some(7));
        assert_eq!(gateway.sent()[0].chat_id, 2);
    }

    #[tokio::test]
    async fn test_poll_once_fetch_error_keeps_offset() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.push_batch(Ok(vec![text_update(3, 1, "/start")]));
        gateway.push_batch(Err(gateway_error("Bad Gateway")));
        let mut companion = companion(&gateway);

        companion.poll_once().await.unwrap();
        assert!(companion.poll_once().await.is_err());
        assert_eq!(companion.offset(), Some(4));
    }

    #[tokio::test]
    async fn test_run_recovers_and_stops_on_shutdown() {
        let gateway = Arc::new(FakeGateway::named("ComboBoardBot"));
        gateway.push_batch(Err(gateway_error("Bad Gateway")));
        gateway.push_batch(Ok(vec![text_update(1, 9, "/start")]));
        let companion = companion(&gateway);

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(companion.run(async move {
            let _ = rx.await;
        }));

        // Wait for the greeting sent after the retry
        for _ in 0..200 {
            if !gateway.sent().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(gateway.sent().len(), 1);

        tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("companion did not stop")
            .unwrap();
    }
}
