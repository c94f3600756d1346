//! `ytthumb urls <url>` – print both tier addresses without fetching.

use anyhow::Result;
use ytthumb_core::config::ThumbConfig;
use ytthumb_core::tier::{thumbnail_url, Tier};
use ytthumb_core::{video_id, ThumbError};

pub fn run_urls(cfg: &ThumbConfig, url: &str, json: bool) -> Result<()> {
    let id = video_id::extract(url).map_err(ThumbError::from)?;
    let primary = thumbnail_url(&cfg.thumbnail_base, &id, Tier::Primary);
    let secondary = thumbnail_url(&cfg.thumbnail_base, &id, Tier::Secondary);

    if json {
        let out = serde_json::json!({
            "id": id,
            "primary": primary,
            "secondary": secondary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:<10} {}", Tier::Primary, primary);
        println!("{:<10} {}", Tier::Secondary, secondary);
    }
    Ok(())
}
