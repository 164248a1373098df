//! Shared Kernel - Vocabulary shared by every backend crate
//!
//! This crate contains:
//! - The unified error type rendered as the `{ success: false, error }` envelope
//! - Typed ID wrappers for persisted entities
//!
//! Anything placed here must mean the same thing to the API server and to
//! the companion bot.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
