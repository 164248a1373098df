//! HTTP Handlers

use crate::application::create_combo::{CreateComboInput, CreateComboUseCase};
use crate::application::delete_combo::DeleteComboUseCase;
use crate::application::list_combos::ListCombosUseCase;
use crate::domain::repository::ComboRepository;
use crate::error::{ComboAction, ComboError};
use crate::presentation::dto::{
    CreateComboRequest, CreateComboResponse, DeleteComboResponse, ListCombosResponse,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppResult;
use std::sync::Arc;

/// Shared state for combo handlers
#[derive(Clone)]
pub struct ComboAppState<R>
where
    R: ComboRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/combos
pub async fn create_combo<R>(
    State(state): State<ComboAppState<R>>,
    payload: Result<Json<CreateComboRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateComboResponse>)>
where
    R: ComboRepository + Clone + Send + Sync + 'static,
{
    // A body we cannot read is a validation failure, answered like any other
    let Json(req) = payload.map_err(|rejection| {
        ComboError::Validation(rejection.body_text()).into_app_error(ComboAction::Save)
    })?;

    let use_case = CreateComboUseCase::new(state.repo.clone());

    let input = CreateComboInput {
        name: req.name,
        author: req.author,
        frames: req.frames,
    };

    let combo = use_case
        .execute(input)
        .await
        .map_err(|e| e.into_app_error(ComboAction::Save))?;

    Ok((StatusCode::CREATED, Json(CreateComboResponse::new(combo))))
}

/// GET /api/combos
pub async fn list_combos<R>(
    State(state): State<ComboAppState<R>>,
) -> AppResult<Json<ListCombosResponse>>
where
    R: ComboRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCombosUseCase::new(state.repo.clone());

    let combos = use_case
        .execute()
        .await
        .map_err(|e| e.into_app_error(ComboAction::Load))?;

    Ok(Json(ListCombosResponse::new(combos)))
}

/// DELETE /api/combos/{id}
pub async fn delete_combo<R>(
    State(state): State<ComboAppState<R>>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteComboResponse>>
where
    R: ComboRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteComboUseCase::new(state.repo.clone());

    use_case
        .execute(&id)
        .await
        .map_err(|e| e.into_app_error(ComboAction::Delete))?;

    Ok(Json(DeleteComboResponse::new()))
}
