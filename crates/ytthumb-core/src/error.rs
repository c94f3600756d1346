//! User-facing error taxonomy.
//!
//! Every error is terminal for the operation that raised it. The message is
//! what the CLI prints; `kind()` is what the session state machine stores.

use thiserror::Error;

use crate::fetch::FetchError;
use crate::video_id::ExtractError;

/// Message used when an error carries no description of its own.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Discriminant of [`ThumbError`], stored in `SessionState::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    MalformedUrl,
    ThumbnailUnavailable,
    DownloadFailed,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThumbError {
    /// Input was blank or whitespace-only.
    #[error("please enter a YouTube URL")]
    EmptyInput,
    /// Input did not match any accepted URL shape.
    #[error("not a valid YouTube video URL")]
    MalformedUrl,
    /// Both resolution tiers failed to load.
    #[error("the thumbnail for this video could not be retrieved")]
    ThumbnailUnavailable,
    /// The byte fetch during save returned a non-success status.
    #[error("download failed")]
    DownloadFailed,
    /// Anything else raised while saving.
    #[error("{}", unknown_message(.0))]
    Unknown(String),
}

fn unknown_message(reason: &str) -> &str {
    if reason.trim().is_empty() {
        UNKNOWN_ERROR
    } else {
        reason
    }
}

impl ThumbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThumbError::EmptyInput => ErrorKind::EmptyInput,
            ThumbError::MalformedUrl => ErrorKind::MalformedUrl,
            ThumbError::ThumbnailUnavailable => ErrorKind::ThumbnailUnavailable,
            ThumbError::DownloadFailed => ErrorKind::DownloadFailed,
            ThumbError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Wrap any displayable error as `Unknown`, keeping its message.
    pub fn unknown(err: impl std::fmt::Display) -> Self {
        ThumbError::Unknown(err.to_string())
    }
}

impl From<ExtractError> for ThumbError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::EmptyInput => ThumbError::EmptyInput,
            ExtractError::MalformedUrl => ThumbError::MalformedUrl,
        }
    }
}

impl From<FetchError> for ThumbError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Http(_) => ThumbError::DownloadFailed,
            other => ThumbError::unknown(other),
        }
    }
}

impl From<std::io::Error> for ThumbError {
    fn from(e: std::io::Error) -> Self {
        ThumbError::unknown(e)
    }
}
