//! `ytthumb id <url>` – print the extracted video id.

use anyhow::Result;
use ytthumb_core::{video_id, ThumbError};

pub fn run_id(url: &str) -> Result<()> {
    let id = video_id::extract(url).map_err(ThumbError::from)?;
    println!("{id}");
    Ok(())
}
