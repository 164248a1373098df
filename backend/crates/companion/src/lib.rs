//! Notification Companion
//!
//! Chat bot that answers the start command with a greeting and a button
//! opening the tactical-board front-end. Runs as its own process and shares
//! nothing with the API server except the front-end URL.
//!
//! Structure:
//! - `domain/` - Greeting, start-command matching, chat gateway trait
//! - `application/` - Configuration and the polling loop
//! - `infra/` - Gateway implementation over the Telegram Bot API

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

pub use application::companion::Companion;
pub use application::config::CompanionConfig;
pub use domain::gateway::ChatGateway;
pub use error::{CompanionError, CompanionResult};

#[cfg(test)]
mod tests;
