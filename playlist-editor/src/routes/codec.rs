use axum::{Json, body::Bytes, http::StatusCode};
use m3u_playlist::{PlaylistEntry, encode};

use crate::{import_error_with_log, transfer::decode_playlist_async};

/// Decodes an uploaded playlist without touching the edited one
pub async fn decode_text(body: Bytes) -> Result<Json<Vec<PlaylistEntry>>, StatusCode> {
    let entries = decode_playlist_async(body)
        .await
        .map_err(import_error_with_log!("Decode playlist"))?;

    Ok(Json(entries))
}

pub async fn encode_entries(Json(entries): Json<Vec<PlaylistEntry>>) -> String {
    encode(&entries)
}
