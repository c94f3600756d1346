//! Video identifier extraction.
//!
//! Turns pasted text into an 11-character YouTube video id. Accepted shapes:
//! `watch?v=`, `embed/`, `youtu.be/`, `shorts/`, `v/`, `e/`, and the generic
//! `youtube.com/<segment>/<path>/<id>` form. Scheme and `www.` are optional.

mod pattern;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Number of characters in a video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Why extraction produced no id. Both variants are failures; they differ
/// only in the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("input is empty")]
    EmptyInput,
    #[error("input does not contain a recognized YouTube video URL")]
    MalformedUrl,
}

/// An 11-character video id drawn from `[a-zA-Z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts the video id from `text`.
///
/// Blank input is rejected before matching. The id must be exactly
/// [`VIDEO_ID_LEN`] characters; a longer run in the same position does not
/// match.
///
/// # Examples
///
/// - `extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ")` → `dQw4w9WgXcQ`
/// - `extract("https://youtu.be/dQw4w9WgXcQ")` → `dQw4w9WgXcQ`
/// - `extract("not a url")` → `Err(MalformedUrl)`
pub fn extract(text: &str) -> Result<VideoId, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    match pattern::capture_id(text) {
        Some(id) => {
            tracing::debug!(%id, "extracted video id");
            Ok(VideoId(id.to_string()))
        }
        None => Err(ExtractError::MalformedUrl),
    }
}
