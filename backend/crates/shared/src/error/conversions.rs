//! Error conversions - HTTP rendering
//!
//! Renders [`AppError`] as the failure envelope
//! `{ "success": false, "error": <message> }`.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "success": false,
            "error": self.message(),
        });

        (status, Json(body)).into_response()
    }
}
