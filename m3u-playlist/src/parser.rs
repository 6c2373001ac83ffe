use std::{
    error::Error,
    fmt::Display,
    io::{self, Read},
    iter::Peekable,
    str::{FromStr, Lines},
    string::FromUtf8Error,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{PathEntry, Playlist, PlaylistEntry, directives};

#[derive(Debug)]
pub enum ReadError {
    IoError(io::Error),
    InvalidUtf8(FromUtf8Error),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => e.fmt(f),
            Self::InvalidUtf8(e) => write!(f, "Playlist is not valid UTF-8: {}", e),
        }
    }
}

impl Error for ReadError {}

impl From<io::Error> for ReadError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

impl From<FromUtf8Error> for ReadError {
    fn from(value: FromUtf8Error) -> Self {
        Self::InvalidUtf8(value)
    }
}

/// Parses playlist text into entries, in file order. Decoding never fails:
/// unknown lines are skipped and missing attributes come back empty.
///
/// The title is the text after the last comma of the `#EXTINF:` line, kept
/// as is. A line without any comma gives an empty title, and an entry with no
/// path lines gives empty `paths`; check [`PlaylistEntry::validate`] before
/// saving such entries.
pub fn decode(text: impl AsRef<str>) -> Vec<PlaylistEntry> {
    Parser::new(text.as_ref()).parse()
}

/// Reads the whole of `reader` before decoding it.
pub fn decode_reader(mut reader: impl Read) -> Result<Vec<PlaylistEntry>, ReadError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(decode(String::from_utf8(buffer)?))
}

impl FromStr for Playlist {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Playlist::new(decode(s)))
    }
}

fn attribute_regex(key: &str) -> Regex {
    Regex::new(&format!("{}=\"([^\"]*)\"", regex::escape(key))).expect("Regular expression error")
}

lazy_static! {
    static ref TVG_ID_REGEX: Regex = attribute_regex(directives::TVG_ID);
    static ref TVG_NAME_REGEX: Regex = attribute_regex(directives::TVG_NAME);
    static ref TVG_LOGO_REGEX: Regex = attribute_regex(directives::TVG_LOGO);
    static ref TVG_RES_REGEX: Regex = attribute_regex(directives::TVG_RES);
    static ref GROUP_TITLE_REGEX: Regex = attribute_regex(directives::GROUP_TITLE);
}

/// Each attribute is looked up on its own, so a broken or missing one does not
/// shift the others.
fn parse_attribute(regex: &Regex, input: impl AsRef<str>) -> SmolStr {
    regex
        .captures(input.as_ref())
        .and_then(|x| x.get(1))
        .map(|x| x.as_str().into())
        .unwrap_or_default()
}

fn is_directive(line: &str) -> bool {
    line.starts_with(directives::EXTINF)
}

struct Parser<'a> {
    lines: Peekable<Lines<'a>>,
    entries: Vec<PlaylistEntry>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().peekable(),
            entries: Vec::new(),
        }
    }

    fn parse_media_info(line: &str) -> PlaylistEntry {
        // title is whatever follows the last comma
        let title = line
            .rsplit_once(',')
            .map(|(_, title)| title)
            .unwrap_or_default();

        PlaylistEntry {
            title: title.into(),
            paths: Vec::new(),
            tvg_id: parse_attribute(&TVG_ID_REGEX, line),
            tvg_name: parse_attribute(&TVG_NAME_REGEX, line),
            tvg_logo: parse_attribute(&TVG_LOGO_REGEX, line),
            tvg_res: parse_attribute(&TVG_RES_REGEX, line),
            group_title: parse_attribute(&GROUP_TITLE_REGEX, line),
            ..Default::default()
        }
    }

    fn parse_path(line: &str) -> Option<PathEntry> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        Some(match line.strip_prefix(directives::INACTIVE_MARKER) {
            Some(url) => PathEntry::inactive(url),
            None => PathEntry::active(line),
        })
    }

    fn parse_paths(&mut self, entry: &mut PlaylistEntry) {
        while let Some(line) = self.lines.next_if(|x| !is_directive(x)) {
            if let Some(path) = Self::parse_path(line) {
                entry.paths.push(path);
            }
        }
    }

    fn parse(mut self) -> Vec<PlaylistEntry> {
        while let Some(line) = self.lines.next() {
            if !is_directive(line) {
                // header, or anything ahead of the first entry
                continue;
            }

            let mut entry = Self::parse_media_info(line);
            self.parse_paths(&mut entry);
            self.entries.push(entry);
        }

        self.entries
    }
}
