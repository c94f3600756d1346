//! `ytthumb get <url>` – resolve the best tier and save it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use ytthumb_core::config::ThumbConfig;
use ytthumb_core::fetch::CurlImageSource;
use ytthumb_core::session::{self, Event, Session, SessionState};

#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub output_dir: Option<PathBuf>,
    pub overwrite: bool,
    pub no_fallback: bool,
}

pub async fn run_get(cfg: &ThumbConfig, url: &str, opts: GetOptions) -> Result<()> {
    let dir = match opts.output_dir.or_else(|| cfg.download_dir.clone()) {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let source = CurlImageSource::from_config(cfg);
    let mut session = Session::new(cfg.thumbnail_base.clone(), cfg.fallback && !opts.no_fallback);

    drive(&mut session, &source, &dir, opts.overwrite, Event::Submit(url.to_string())).await?;
    check(&session)?;
    let tier = match session.state() {
        SessionState::Displaying { tier, .. } => tier,
        other => anyhow::bail!("unexpected state after lookup: {:?}", other),
    };
    if let Some(address) = session.thumbnail_address() {
        println!("Found {tier} thumbnail: {address}");
    }

    drive(&mut session, &source, &dir, opts.overwrite, Event::DownloadRequested).await?;
    check(&session)?;
    match session.saved_path() {
        Some(path) => println!("Saved {}", path.display()),
        None => anyhow::bail!("thumbnail was not saved"),
    }
    Ok(())
}

/// Feed `first` to the session and perform effects until it settles.
/// Each blocking curl call runs on the blocking pool and is awaited in turn.
async fn drive(
    session: &mut Session,
    source: &CurlImageSource,
    dir: &Path,
    overwrite: bool,
    first: Event,
) -> Result<()> {
    let mut next = session.handle(first);
    while let Some(effect) = next {
        let source = source.clone();
        let dir = dir.to_path_buf();
        let event = tokio::task::spawn_blocking(move || {
            session::perform(&effect, &source, &dir, overwrite)
        })
        .await
        .context("thumbnail task panicked")?;
        next = session.handle(event);
    }
    Ok(())
}

fn check(session: &Session) -> Result<()> {
    match session.error() {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}
