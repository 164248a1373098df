//! Companion Error Types

use platform::telegram::TelegramError;
use thiserror::Error;

pub type CompanionResult<T> = Result<T, CompanionError>;

#[derive(Debug, Error)]
pub enum CompanionError {
    /// Chat platform rejected or failed a call
    #[error("Chat gateway error: {0}")]
    Gateway(#[from] TelegramError),
}
