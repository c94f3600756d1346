//! Save a thumbnail to disk.
//!
//! Fetches the bytes at an address and writes them to `<dir>/<stem>.jpg`
//! through a `.part` temp file that is removed on every failure path and
//! renamed into place on success.

mod sanitize;
mod temp;

pub use sanitize::sanitize_stem;

use std::path::{Path, PathBuf};

use crate::error::ThumbError;
use crate::fetch::ImageSource;

/// Stem used when no video id (or only an unusable name) is available.
pub const FALLBACK_STEM: &str = "youtube_thumbnail";

/// Extension of every saved file.
pub const EXTENSION: &str = "jpg";

/// File name for a save: sanitized `stem` (or [`FALLBACK_STEM`]) plus `.jpg`.
/// Video ids pass through unchanged.
///
/// - `file_name(Some("dQw4w9WgXcQ"))` → `"dQw4w9WgXcQ.jpg"`
/// - `file_name(None)` → `"youtube_thumbnail.jpg"`
pub fn file_name(stem: Option<&str>) -> String {
    let stem = stem.map(sanitize_stem).filter(|s| !s.is_empty());
    format!(
        "{}.{}",
        stem.as_deref().unwrap_or(FALLBACK_STEM),
        EXTENSION
    )
}

/// Fetch `address` and save it into `dir` as `file_name(stem)`.
///
/// A non-2xx response is [`ThumbError::DownloadFailed`]; anything else that
/// goes wrong is [`ThumbError::Unknown`] with a readable reason. Nothing is
/// left on disk when the save fails. An existing file is only replaced when
/// `overwrite` is set.
pub fn save<S>(
    source: &S,
    address: &str,
    dir: &Path,
    stem: Option<&str>,
    overwrite: bool,
) -> Result<PathBuf, ThumbError>
where
    S: ImageSource + ?Sized,
{
    let final_path = dir.join(file_name(stem));
    if final_path.exists() && !overwrite {
        return Err(already_exists(&final_path));
    }

    let bytes = source.fetch(address).map_err(|e| {
        tracing::warn!(address, "thumbnail fetch failed: {}", e);
        ThumbError::from(e)
    })?;

    let mut part = temp::TempFile::create(temp::temp_path(&final_path))?;
    part.write_all(&bytes)?;
    part.finalize(&final_path, overwrite).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            already_exists(&final_path)
        } else {
            ThumbError::from(e)
        }
    })?;

    tracing::info!(
        address,
        path = %final_path.display(),
        bytes = bytes.len(),
        "thumbnail saved"
    );
    Ok(final_path)
}

fn already_exists(path: &Path) -> ThumbError {
    ThumbError::Unknown(format!(
        "file already exists: {} (use --overwrite to replace)",
        path.display()
    ))
}
