use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::AppStateRef;

mod codec;
mod entries;
mod transfer;

pub fn get_routes(app_state: &AppStateRef) -> Router {
    Router::new()
        .route(
            "/entries",
            get(entries::list_entries)
                .post(entries::add_entry)
                .delete(entries::clear_entries),
        )
        .route(
            "/entries/{id}",
            get(entries::get_entry)
                .put(entries::update_entry)
                .delete(entries::remove_entry),
        )
        .route("/entries/{id}/move", post(entries::move_entry))
        .route("/import", post(transfer::import_playlist))
        .route("/export", get(transfer::export_playlist))
        .route("/codec/decode", post(codec::decode_text))
        .route("/codec/encode", post(codec::encode_entries))
        .layer(DefaultBodyLimit::max(app_state.upload_limit))
        .with_state(app_state.clone())
}
