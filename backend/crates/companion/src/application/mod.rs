//! Application Layer
//!
//! Companion configuration and the update loop.

pub mod companion;
pub mod config;
