//! Carry out an [`Effect`] and report the outcome as an [`Event`].

use std::path::Path;

use super::{Effect, Event};
use crate::fetch::ImageSource;
use crate::save;

/// Perform `effect` against `source`, saving into `dir`. Blocks on I/O.
pub fn perform<S>(effect: &Effect, source: &S, dir: &Path, overwrite: bool) -> Event
where
    S: ImageSource + ?Sized,
{
    match effect {
        Effect::LoadImage { address } => match source.probe(address) {
            Ok(head) => {
                tracing::debug!(
                    address = %address,
                    content_type = ?head.content_type,
                    content_length = ?head.content_length,
                    "image loaded"
                );
                Event::ImageLoaded(address.clone())
            }
            Err(e) => {
                tracing::info!(address = %address, "image load failed: {}", e);
                Event::ImageFailed(address.clone())
            }
        },
        Effect::Save { address, file_stem } => Event::DownloadFinished {
            address: address.clone(),
            result: save::save(source, address, dir, file_stem.as_deref(), overwrite),
        },
    }
}
