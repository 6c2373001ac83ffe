use std::fmt::Display;

use crate::format::{Playlist, PlaylistEntry, directives};

/// Generates the playlist text for `entries`, in order.
pub fn encode(entries: &[PlaylistEntry]) -> String {
    EntriesWriter(entries).to_string()
}

struct EntriesWriter<'a>(&'a [PlaylistEntry]);

impl Display for EntriesWriter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        writeln!(f, "{}", directives::EXTM3U)?;

        // entries, separated by a blank line
        for (index, entry) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "\n\n")?;
            }
            entry.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        EntriesWriter(&self.entries).fmt(f)
    }
}

impl Display for PlaylistEntry {
    /// Writes one block. Values are not escaped, and active paths always come
    /// before inactive ones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:-1 attributes...,title
        write!(f, "{}{}", directives::EXTINF, directives::LIVE_DURATION)?;
        for (key, value) in [
            (directives::TVG_ID, &self.tvg_id),
            (directives::TVG_NAME, &self.tvg_name),
            (directives::TVG_LOGO, &self.tvg_logo),
            (directives::TVG_RES, &self.tvg_res),
            (directives::GROUP_TITLE, &self.group_title),
        ] {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        write!(f, ",{}", self.title)?;

        for path in self.active_paths() {
            write!(f, "\n{}", path.url)?;
        }
        for path in self.inactive_paths() {
            write!(f, "\n{}{}", directives::INACTIVE_MARKER, path.url)?;
        }

        Ok(())
    }
}
