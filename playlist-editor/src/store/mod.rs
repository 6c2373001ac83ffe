mod playlist_store;
pub use playlist_store::*;
