use std::{fmt::Display, io::Cursor};

use axum::body::Bytes;
use m3u_playlist::{PlaylistEntry, ReadError};
use std::error::Error;
use tokio::task::JoinError;

#[derive(Debug)]
pub enum ImportError {
    ReadError(ReadError),
    JoinError(JoinError),
}

impl ImportError {
    /// The upload itself was bad, as opposed to the server failing
    pub fn is_invalid_text(&self) -> bool {
        matches!(self, Self::ReadError(ReadError::InvalidUtf8(_)))
    }
}

impl Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JoinError(e) => e.fmt(f),
            Self::ReadError(e) => e.fmt(f),
        }
    }
}

impl Error for ImportError {}

impl From<JoinError> for ImportError {
    fn from(value: JoinError) -> Self {
        Self::JoinError(value)
    }
}

impl From<ReadError> for ImportError {
    fn from(value: ReadError) -> Self {
        Self::ReadError(value)
    }
}

/// Decodes a complete uploaded playlist off the async runtime
pub async fn decode_playlist_async(data: Bytes) -> Result<Vec<PlaylistEntry>, ImportError> {
    Ok(
        tokio::task::spawn_blocking(move || m3u_playlist::decode_reader(Cursor::new(data)))
            .await??,
    )
}
