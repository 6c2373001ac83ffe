mod entry;
mod playlist;
pub use entry::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF:";
    /// Duration written on every directive line, the stream length is unknown
    pub const LIVE_DURATION: &str = "-1";
    /// Prefix of a disabled path line
    pub const INACTIVE_MARKER: char = '#';

    pub const TVG_ID: &str = "tvg-id";
    pub const TVG_NAME: &str = "tvg-name";
    pub const TVG_LOGO: &str = "tvg-logo";
    pub const TVG_RES: &str = "tvg-res";
    pub const GROUP_TITLE: &str = "group-title";
}
