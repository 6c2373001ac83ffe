//! # m3u-playlist
//! A library for parsing and generating extended m3u playlists whose entries
//! carry several alternative locations. Disabled locations are kept in the
//! file as `#`-commented lines.
//!
//! # Example
//! ```rust
//! use m3u_playlist::{decode, encode};
//!
//! // 1. Parse
//! let entries = decode(r#"#EXTM3U
//! #EXTINF:-1 tvg-id="a" tvg-name="" tvg-logo="" tvg-res="" group-title="News",A
//! http://example.com/A.m3u8
//! #http://backup.example.com/A.m3u8"#);
//! assert_eq!(entries[0].paths.len(), 2);
//! assert!(!entries[0].paths[1].active);
//!
//! // 2. Generate
//! println!("{}", encode(&entries));
//! ```

mod builder;
pub mod format;
mod parser;
pub use builder::*;
pub use format::{EntryId, PathEntry, Playlist, PlaylistEntry, ValidationError};
pub use parser::*;
