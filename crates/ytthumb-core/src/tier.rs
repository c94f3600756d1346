//! Resolution tiers and thumbnail address construction.

use std::fmt;

use crate::video_id::VideoId;

/// Default image host prefix; addresses are `<base>/<id>/<suffix>`.
pub const DEFAULT_THUMBNAIL_BASE: &str = "https://i.ytimg.com/vi";

/// Image resolution variant, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// High resolution (`maxresdefault.jpg`). Not every video has one.
    Primary,
    /// Standard definition (`sddefault.jpg`).
    Secondary,
}

impl Tier {
    pub fn suffix(self) -> &'static str {
        match self {
            Tier::Primary => "maxresdefault.jpg",
            Tier::Secondary => "sddefault.jpg",
        }
    }

    /// The tier to try after this one fails, if any.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Primary => Some(Tier::Secondary),
            Tier::Secondary => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Tier::Primary => "primary",
            Tier::Secondary => "secondary",
        })
    }
}

/// Builds the image address for `id` at `tier` under `base`.
///
/// A trailing `/` on `base` is ignored.
pub fn thumbnail_url(base: &str, id: &VideoId, tier: Tier) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), id, tier.suffix())
}
