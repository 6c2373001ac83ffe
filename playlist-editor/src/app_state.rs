use std::sync::Arc;

use log::info;

use crate::{Config, store::PlaylistStore};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<PlaylistStore>,
    pub export_filename: String,
    pub upload_limit: usize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let export_filename = config
            .export_filename
            .clone()
            .unwrap_or_else(|| "playlist.m3u".into());
        let upload_limit = config.upload_limit.unwrap_or(16 * 1024 * 1024); // 16MB
        info!(
            "Exporting as {}, accepting uploads up to {} bytes",
            export_filename, upload_limit
        );

        Self {
            config: Arc::new(config),
            store: PlaylistStore::new(),
            export_filename,
            upload_limit,
        }
    }
}
