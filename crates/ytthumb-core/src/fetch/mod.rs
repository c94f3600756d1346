//! Thumbnail I/O: probing an address (the "display" load) and fetching bytes.
//!
//! The session and save paths only depend on [`ImageSource`]; the libcurl
//! implementation lives in [`CurlImageSource`]. Calls block the current
//! thread; call from `spawn_blocking` if used from async code.

mod curl_source;
mod parse;

pub use curl_source::CurlImageSource;

use thiserror::Error;

/// Key response headers from a successful probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageHead {
    /// Size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
    /// `Content-Type` value if present (e.g. `image/jpeg`).
    pub content_type: Option<String>,
}

/// Transport failure or non-2xx status.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, bad URL, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Something that can load thumbnail addresses.
pub trait ImageSource {
    /// Check that `address` serves an image. Success means a 2xx response.
    fn probe(&self, address: &str) -> Result<ImageHead, FetchError>;

    /// Fetch the full body at `address`.
    fn fetch(&self, address: &str) -> Result<Vec<u8>, FetchError>;
}

pub(crate) fn check_status(code: u32) -> Result<(), FetchError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(FetchError::Http(code))
    }
}
