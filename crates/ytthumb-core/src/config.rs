use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::tier::DEFAULT_THUMBNAIL_BASE;

/// Global configuration loaded from `~/.config/ytthumb/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbConfig {
    /// Image host prefix; addresses are `<thumbnail_base>/<id>/<tier>.jpg`.
    pub thumbnail_base: String,
    /// Connect timeout in seconds for probes and fetches.
    pub connect_timeout_secs: u64,
    /// Total timeout in seconds for a single probe or fetch.
    pub timeout_secs: u64,
    /// Try the standard-definition tier when the high-resolution one is missing.
    #[serde(default = "default_fallback")]
    pub fallback: bool,
    /// Directory to save thumbnails into (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Optional User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_fallback() -> bool {
    true
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            thumbnail_base: DEFAULT_THUMBNAIL_BASE.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            fallback: true,
            download_dir: None,
            user_agent: None,
        }
    }
}

impl ThumbConfig {
    /// Rejects a `thumbnail_base` that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.thumbnail_base)
            .with_context(|| format!("invalid thumbnail_base: {}", self.thumbnail_base))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "thumbnail_base must be http or https, got {}",
                base.scheme()
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytthumb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ThumbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ThumbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ThumbConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
