//! Static Front-end Files
//!
//! Serves the front-end bundle for every path outside the API. Hidden
//! entries (`.env`, `.git/...`) are never served, even when they sit in the
//! static directory.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use std::path::Path;
use tower_http::services::ServeDir;

/// `ServeDir` over `dir`, with hidden paths answered by 404
pub fn static_files(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(middleware::from_fn(hide_dotfiles))
}

/// Middleware that refuses any path with a segment starting with a dot
pub async fn hide_dotfiles(req: Request<Body>, next: Next) -> Response {
    if is_hidden_path(req.uri().path()) {
        tracing::debug!(path = %req.uri().path(), "Refusing hidden static path");
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(req).await
}

/// Whether any segment of `path` names a hidden entry
///
/// `ServeDir` percent-decodes the path, so an encoded leading dot counts too.
fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}
