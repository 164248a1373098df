//! Combo Error Types
//!
//! Combo-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Combo-specific result type alias
pub type ComboResult<T> = Result<T, ComboError>;

/// Combo-specific error variants
///
/// `Validation` is the only caller-side failure; everything else is a store
/// failure. The HTTP contract does not tell them apart by status: both are 500.
#[derive(Debug, Error)]
pub enum ComboError {
    /// Required field missing, or request body not understood
    #[error("{0}")]
    Validation(String),

    /// Identifier is not something the store can look up
    #[error("Malformed combo identifier: {0}")]
    MalformedId(String),

    /// Store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The operation that failed, used to pick the client-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboAction {
    Save,
    Load,
    Delete,
}

impl ComboAction {
    /// Short message returned to the client for store failures
    pub fn failure_message(&self) -> &'static str {
        match self {
            ComboAction::Save => "Failed to save combo",
            ComboAction::Load => "Failed to load combos",
            ComboAction::Delete => "Failed to delete combo",
        }
    }
}

impl ComboError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ComboError::Validation(_))
    }

    pub fn is_store(&self) -> bool {
        !self.is_validation()
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    /// Log the error with appropriate level
    fn log(&self, action: ComboAction) {
        match self {
            ComboError::Validation(msg) => {
                tracing::warn!(?action, message = %msg, "Combo validation failed");
            }
            ComboError::MalformedId(id) => {
                tracing::warn!(?action, id = %id, "Malformed combo identifier");
            }
            ComboError::Unavailable(reason) => {
                tracing::error!(?action, reason = %reason, "Combo store unavailable");
            }
            ComboError::Database(e) => {
                tracing::error!(?action, error = %e, "Combo database error");
            }
        }
    }

    /// Convert into the boundary error for `action`
    ///
    /// Validation messages reach the client verbatim; store details stay in
    /// the log and the client gets the per-action message.
    pub fn into_app_error(self, action: ComboAction) -> AppError {
        self.log(action);
        let kind = self.kind();
        match self {
            ComboError::Validation(msg) => AppError::new(kind, msg),
            other => AppError::new(kind, action.failure_message()).with_source(other),
        }
    }
}
