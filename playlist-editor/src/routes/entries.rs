use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use m3u_playlist::{EntryId, PlaylistEntry};
use serde::Deserialize;

use crate::{AppStateRef, store_error_with_log};

#[derive(Deserialize)]
pub struct MoveRequest {
    pub position: usize,
}

pub async fn list_entries(State(state): State<AppStateRef>) -> Json<Vec<PlaylistEntry>> {
    Json(state.store.list().await)
}

pub async fn get_entry(
    State(state): State<AppStateRef>,
    Path(id): Path<u64>,
) -> Result<Json<PlaylistEntry>, StatusCode> {
    let entry = state
        .store
        .get(EntryId::from(id))
        .await
        .map_err(store_error_with_log!("Get entry"))?;

    Ok(Json(entry))
}

pub async fn add_entry(
    State(state): State<AppStateRef>,
    Json(draft): Json<PlaylistEntry>,
) -> Result<Response, StatusCode> {
    let entry = state
        .store
        .add(draft)
        .await
        .map_err(store_error_with_log!("Add entry"))?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

pub async fn update_entry(
    State(state): State<AppStateRef>,
    Path(id): Path<u64>,
    Json(draft): Json<PlaylistEntry>,
) -> Result<Json<PlaylistEntry>, StatusCode> {
    let entry = state
        .store
        .update(EntryId::from(id), draft)
        .await
        .map_err(store_error_with_log!("Update entry"))?;

    Ok(Json(entry))
}

pub async fn remove_entry(
    State(state): State<AppStateRef>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    state
        .store
        .remove(EntryId::from(id))
        .await
        .map_err(store_error_with_log!("Remove entry"))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn move_entry(
    State(state): State<AppStateRef>,
    Path(id): Path<u64>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<Vec<PlaylistEntry>>, StatusCode> {
    let entries = state
        .store
        .move_to(EntryId::from(id), request.position)
        .await
        .map_err(store_error_with_log!("Move entry"))?;

    Ok(Json(entries))
}

pub async fn clear_entries(State(state): State<AppStateRef>) -> StatusCode {
    state.store.clear().await;
    StatusCode::NO_CONTENT
}
