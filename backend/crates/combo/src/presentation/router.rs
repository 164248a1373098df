//! Combo Router

use crate::domain::repository::ComboRepository;
use crate::infra::postgres::PgComboRepository;
use crate::presentation::handlers::{self, ComboAppState};
use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

/// Create the combo router with PostgreSQL repository
///
/// Nest it under `/api/combos`.
pub fn combo_router(repo: PgComboRepository) -> Router {
    combo_router_generic(repo)
}

/// Create a generic combo router for any repository implementation
pub fn combo_router_generic<R>(repo: R) -> Router
where
    R: ComboRepository + Clone + Send + Sync + 'static,
{
    let state = ComboAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_combos::<R>).post(handlers::create_combo::<R>),
        )
        .route("/{id}", delete(handlers::delete_combo::<R>))
        .with_state(state)
}
