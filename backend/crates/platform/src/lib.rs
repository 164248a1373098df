//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Telegram Bot API client (long polling, messages, command menu)
//! - Process shutdown signal handling

pub mod shutdown;
pub mod telegram;
