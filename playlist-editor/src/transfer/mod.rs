mod playlist_import;
pub use playlist_import::*;
