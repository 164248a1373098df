//! Combo Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Combo entity, value objects, repository trait
//! - `application/` - Use cases (create, list, delete)
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs and router
//!
//! ## Contract
//! - Every persisted combo has a non-empty name and a frames array
//! - Frames are opaque JSON; no schema is imposed on their contents
//! - Delete is idempotent: unknown identifiers succeed silently
//! - Every failure is answered with HTTP 500 and `{ success: false, error }`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::entities::{Combo, NewCombo};
pub use domain::repository::ComboRepository;
pub use error::{ComboError, ComboResult};
pub use infra::memory::InMemoryComboRepository;
pub use infra::postgres::PgComboRepository;
pub use presentation::router::{combo_router, combo_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::id::ComboId;
