//! The single pattern shared by every accepted URL shape.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix alternatives, then exactly 11 id characters followed by a
/// non-id character or end of input.
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:https?://)?(?:www\.)?",
        r"(?:youtube\.com/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)",
        r"|youtu\.be/",
        r"|youtube\.com/shorts/)",
        r"(?P<id>[a-zA-Z0-9_-]{11})",
        r"(?:[^a-zA-Z0-9_-]|$)",
    ))
    .expect("video id pattern is valid")
});

/// Returns the captured id, if any shape matches.
pub(super) fn capture_id(text: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(text)
        .and_then(|cap| cap.name("id"))
        .map(|m| m.as_str())
}
