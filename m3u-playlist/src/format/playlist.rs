use serde::{Deserialize, Serialize};

use crate::format::PlaylistEntry;

/// An ordered playlist. `to_string()` produces the file text and `parse()`
/// reads it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    /// Entries of this playlist, in file order
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    pub fn new(entries: Vec<PlaylistEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<PlaylistEntry>> for Playlist {
    fn from(value: Vec<PlaylistEntry>) -> Self {
        Self::new(value)
    }
}

impl From<Playlist> for Vec<PlaylistEntry> {
    fn from(value: Playlist) -> Self {
        value.entries
    }
}
