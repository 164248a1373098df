//! Telegram Bot API client
//!
//! Minimal typed client over `reqwest` for the handful of Bot API methods the
//! companion needs: `getMe`, `getUpdates`, `sendMessage`, `setMyCommands`.
//! Every method is a JSON POST to `{base_url}/bot{token}/{method}` answered
//! with `{ ok, result | description }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Public Bot API endpoint
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Extra time allowed on top of the long-poll timeout before the HTTP
/// request itself gives up
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

// ============================================================================
// Error Types
// ============================================================================

pub type TelegramResult<T> = Result<T, TelegramError>;

#[derive(Debug, Error)]
pub enum TelegramError {
    /// Transport failure; the request URL (which embeds the token) is stripped
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The Bot API answered `ok: false`
    #[error("Bot API error ({code:?}): {description}")]
    Api {
        code: Option<i64>,
        description: String,
    },

    /// The Bot API answered `ok: true` without a result
    #[error("Bot API returned no result for {0}")]
    EmptyResult(&'static str),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        TelegramError::Http(err.without_url())
    }
}

// ============================================================================
// Bot API types
// ============================================================================

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self, method: &'static str) -> TelegramResult<T> {
        if !self.ok {
            return Err(TelegramError::Api {
                code: self.error_code,
                description: self
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }
        self.result.ok_or(TelegramError::EmptyResult(method))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One incoming update; kinds other than `message` are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// A keyboard with one row holding one URL button
    pub fn single_url_button(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: text.into(),
                url: url.into(),
            }]],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

/// Parameters of `sendMessage`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct GetUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct SetMyCommands<'a> {
    commands: &'a [BotCommand],
}

#[derive(Debug, Serialize)]
struct NoParams {}

// ============================================================================
// Client
// ============================================================================

/// Bot API client; cheap to clone (shares the connection pool)
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl TelegramClient {
    /// Create a client for `token`
    ///
    /// `poll_timeout` is the long-poll timeout later passed to
    /// [`get_updates`](Self::get_updates); HTTP requests are allowed a little
    /// longer than that.
    pub fn new(token: impl Into<String>, poll_timeout: Duration) -> TelegramResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(poll_timeout + REQUEST_TIMEOUT_MARGIN)
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
        })
    }

    /// Point the client at another Bot API server (e.g. a local one)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    async fn call<P, T>(&self, method: &'static str, params: &P) -> TelegramResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response: ApiResponse<T> = self
            .http
            .post(self.method_url(method))
            .json(params)
            .send()
            .await?
            .json()
            .await?;

        response.into_result(method)
    }

    /// The bot's own account; doubles as a token check
    pub async fn get_me(&self) -> TelegramResult<User> {
        self.call("getMe", &NoParams {}).await
    }

    /// Long-poll for message updates with `update_id >= offset`
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> TelegramResult<Vec<Update>> {
        let params = GetUpdates {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: &["message"],
        };
        self.call("getUpdates", &params).await
    }

    pub async fn send_message(&self, message: &SendMessage) -> TelegramResult<Message> {
        self.call("sendMessage", message).await
    }

    /// Replace the bot's command menu
    pub async fn set_my_commands(&self, commands: &[BotCommand]) -> TelegramResult<bool> {
        self.call("setMyCommands", &SetMyCommands { commands }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> TelegramClient {
        TelegramClient::new("123:ABC", Duration::from_secs(30)).unwrap()
    }

    #[test]
    fn test_method_url() {
        let client = client();
        assert_eq!(
            client.method_url("getMe"),
            "https://api.telegram.org/bot123:ABC/getMe"
        );

        let client = client.with_base_url("http://localhost:8081/");
        assert_eq!(client.base_url(), "http://localhost:8081");
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:8081/bot123:ABC/sendMessage"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("ABC"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_send_message_serialization() {
        let message = SendMessage {
            chat_id: 42,
            text: "hi".to_string(),
            reply_markup: Some(InlineKeyboardMarkup::single_url_button(
                "Open",
                "https://example.com",
            )),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "chat_id": 42,
                "text": "hi",
                "reply_markup": {
                    "inline_keyboard": [[{"text": "Open", "url": "https://example.com"}]]
                }
            })
        );

        let plain = SendMessage {
            reply_markup: None,
            ..message
        };
        assert!(serde_json::to_value(&plain).unwrap().get("reply_markup").is_none());
    }

    #[test]
    fn test_get_updates_params() {
        let params = GetUpdates {
            offset: None,
            timeout: 30,
            allowed_updates: &["message"],
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"timeout": 30, "allowed_updates": ["message"]})
        );
    }

    #[test]
    fn test_update_deserialization() {
        let raw = json!({
            "ok": true,
            "result": [
                {
                    "update_id": 9001,
                    "message": {
                        "message_id": 7,
                        "date": 1700000000,
                        "chat": {"id": -100, "type": "private"},
                        "from": {"id": 5, "is_bot": false, "first_name": "Ann"},
                        "text": "/start"
                    }
                },
                {"update_id": 9002, "edited_message": {}}
            ]
        });

        let response: ApiResponse<Vec<Update>> = serde_json::from_value(raw).unwrap();
        let updates = response.into_result("getUpdates").unwrap();

        assert_eq!(updates.len(), 2);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, -100);
        assert_eq!(message.text.as_deref(), Some("/start"));
        assert_eq!(message.from.as_ref().unwrap().first_name, "Ann");
        assert!(updates[1].message.is_none());
    }

    #[test]
    fn test_api_error_response() {
        let raw = json!({"ok": false, "error_code": 401, "description": "Unauthorized"});
        let response: ApiResponse<User> = serde_json::from_value(raw).unwrap();

        match response.into_result("getMe") {
            Err(TelegramError::Api { code, description }) => {
                assert_eq!(code, Some(401));
                assert_eq!(description, "Unauthorized");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn test_ok_without_result() {
        let response: ApiResponse<bool> = serde_json::from_value(json!({"ok": true})).unwrap();
        assert!(matches!(
            response.into_result("setMyCommands"),
            Err(TelegramError::EmptyResult("setMyCommands"))
        ));
    }
}
