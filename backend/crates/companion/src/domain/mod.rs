//! Domain Layer
//!
//! - Greeting and command-menu entry
//! - Start-command recognition
//! - Chat gateway trait (interface)

pub mod gateway;
pub mod greeting;
