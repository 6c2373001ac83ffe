use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::info;
use m3u_playlist::{PlaylistEntry, encode};

use crate::{
    AppStateRef, import_error_with_log, store_error_with_log, transfer::decode_playlist_async,
};

pub const PLAYLIST_CONTENT_TYPE: &str = "audio/x-mpegurl";

/// Replaces the whole playlist with the uploaded file
pub async fn import_playlist(
    State(state): State<AppStateRef>,
    body: Bytes,
) -> Result<Json<Vec<PlaylistEntry>>, StatusCode> {
    let entries = decode_playlist_async(body)
        .await
        .map_err(import_error_with_log!("Import playlist"))?;

    info!("Imported {} entries", entries.len());
    Ok(Json(state.store.replace(entries).await))
}

pub async fn export_playlist(State(state): State<AppStateRef>) -> Result<Response, StatusCode> {
    let entries = state
        .store
        .export()
        .await
        .map_err(store_error_with_log!("Export playlist"))?;

    Ok((
        [
            (header::CONTENT_TYPE, PLAYLIST_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", state.export_filename),
            ),
        ],
        encode(&entries),
    )
        .into_response())
}
