//! Infrastructure Layer - Chat gateway implementations

pub mod telegram;
