//! Application Layer - Use Cases
//!
//! This layer enforces the create-time invariants and orchestrates the
//! repository. Contains use case implementations.

pub mod create_combo;
pub mod delete_combo;
pub mod list_combos;
