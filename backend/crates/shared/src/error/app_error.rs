//! Application Error - Unified error type at the HTTP boundary
//!
//! Defines [`AppError`] and [`AppResult<T>`]. Domain crates keep their own
//! `thiserror` enums and convert into `AppError` when a handler returns.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified application error
///
/// `message` is what the client sees in the `error` field of the failure
/// envelope. `source` is kept for logs and never rendered.
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::InternalServerError, "Failed to save combo");
/// assert_eq!(err.status_code(), 500);
/// assert_eq!(err.message(), "Failed to save combo");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Attach the underlying error (debug/logging only)
    ///
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn read_bundle() -> AppResult<String> {
    ///     std::fs::read_to_string("index.html")
    ///         .map_err(|e| AppError::internal("Failed to read bundle").with_source(e))
    /// }
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::InternalServerError, "name is required");
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "name is required");
        assert!(err.source().is_none());
        assert_eq!(
            AppError::internal(String::from("owned")).message(),
            "owned"
        );
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = AppError::internal("Failed to load combos").with_source(io_err);
        assert!(err.source().is_some());
        assert!(format!("{err:?}").contains("refused"));
        // the source never leaks into Display
        assert_eq!(err.to_string(), "[Internal Server Error] Failed to load combos");
    }
}
