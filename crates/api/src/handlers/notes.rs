//! Handlers for the `/notes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use notekeeper_core::notes::{CreateNote, Note, NotePatch};
use notekeeper_core::types::DbId;

use crate::error::AppResult;
use crate::query::ListNotesParams;
use crate::state::AppState;

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let note = state.notes.create(&input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/notes?archived=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListNotesParams>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = state.notes.find_all(params.archived).await?;
    Ok(Json(notes))
}

/// GET /api/v1/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Note>> {
    let note = state.notes.find_one(id).await?;
    Ok(Json(note))
}

/// PATCH /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<NotePatch>,
) -> AppResult<Json<Note>> {
    let note = state.notes.update(id, &patch).await?;
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.notes.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
