//! Temp file that is removed on drop unless finalized.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path for the temp file: appends `.part` to the final path (e.g. `id.jpg` → `id.jpg.part`).
pub(crate) fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Owns a `.part` file for the duration of a save. Dropping it without
/// calling `finalize` deletes the file.
pub(crate) struct TempFile {
    file: Option<File>,
    path: PathBuf,
}

impl TempFile {
    /// Create (or truncate) the temp file at `path`.
    pub(crate) fn create(path: PathBuf) -> std::io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self {
            file: Some(file),
            path,
        })
    }

    pub(crate) fn write_all(&mut self, data: &[u8]) -> std::io::Result<()> {
        match self.file.as_mut() {
            Some(f) => f.write_all(data),
            None => Err(std::io::Error::other("temp file already closed")),
        }
    }

    /// Sync, close and move onto `final_path`.
    ///
    /// Without `overwrite` the move is a hard link plus unlink, which fails
    /// with `AlreadyExists` if `final_path` appeared after the caller checked.
    pub(crate) fn finalize(mut self, final_path: &Path, overwrite: bool) -> std::io::Result<()> {
        if let Some(f) = self.file.take() {
            f.sync_all()?;
        }
        if overwrite {
            std::fs::rename(&self.path, final_path)?;
        } else {
            std::fs::hard_link(&self.path, final_path)?;
            std::fs::remove_file(&self.path)?;
        }
        // Moved away; nothing left for Drop to remove.
        self.path = PathBuf::new();
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        self.file.take();
        if self.path.as_os_str().is_empty() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), "could not remove temp file: {}", e);
        }
    }
}
