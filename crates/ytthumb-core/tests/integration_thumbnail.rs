//! Integration test: local HTTP server, curl-backed source, full session.
//!
//! Starts a minimal image server, drives a session from pasted URL to saved
//! file, and checks tier fallback and failure paths over real HTTP.

mod common;

use std::collections::HashMap;
use std::path::Path;

use tempfile::tempdir;
use ytthumb_core::config::ThumbConfig;
use ytthumb_core::fetch::{CurlImageSource, ImageSource};
use ytthumb_core::session::{self, Event, Session, SessionState};
use ytthumb_core::tier::Tier;
use ytthumb_core::{save, ErrorKind, ThumbError};

const ID: &str = "dQw4w9WgXcQ";

fn config_for(base: &str) -> ThumbConfig {
    ThumbConfig {
        thumbnail_base: format!("{}/vi", base),
        connect_timeout_secs: 2,
        timeout_secs: 5,
        ..ThumbConfig::default()
    }
}

/// Runs effects until the session settles, moving blocking I/O off the runtime.
async fn drive(session: &mut Session, source: &CurlImageSource, dir: &Path, first: Event) {
    let mut next = session.handle(first);
    while let Some(effect) = next {
        let source = source.clone();
        let dir = dir.to_path_buf();
        let event = tokio::task::spawn_blocking(move || session::perform(&effect, &source, &dir, false))
            .await
            .expect("join");
        next = session.handle(event);
    }
}

#[tokio::test]
async fn primary_available_is_saved() {
    let body: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let base = common::image_server::start(HashMap::from([(
        format!("/vi/{ID}/maxresdefault.jpg"),
        body.clone(),
    )]));
    let cfg = config_for(&base);
    let source = CurlImageSource::from_config(&cfg);
    let dir = tempdir().unwrap();
    let mut s = Session::from_config(&cfg);

    drive(
        &mut s,
        &source,
        dir.path(),
        Event::Submit(format!("https://www.youtube.com/watch?v={ID}")),
    )
    .await;
    assert_eq!(
        s.state(),
        SessionState::Displaying {
            tier: Tier::Primary,
            loaded: true
        }
    );

    drive(&mut s, &source, dir.path(), Event::DownloadRequested).await;
    let saved = s.saved_path().expect("saved");
    assert_eq!(saved, &dir.path().join(format!("{ID}.jpg")));
    assert_eq!(std::fs::read(saved).unwrap(), body);
}

#[tokio::test]
async fn missing_primary_falls_back_to_secondary() {
    let base = common::image_server::start(HashMap::from([(
        format!("/vi/{ID}/sddefault.jpg"),
        b"standard definition".to_vec(),
    )]));
    let cfg = config_for(&base);
    let source = CurlImageSource::from_config(&cfg);
    let dir = tempdir().unwrap();
    let mut s = Session::from_config(&cfg);

    drive(
        &mut s,
        &source,
        dir.path(),
        Event::Submit(format!("https://youtu.be/{ID}")),
    )
    .await;
    assert_eq!(
        s.thumbnail_address(),
        Some(format!("{base}/vi/{ID}/sddefault.jpg"))
    );

    drive(&mut s, &source, dir.path(), Event::DownloadRequested).await;
    let saved = s.saved_path().expect("saved");
    assert_eq!(std::fs::read(saved).unwrap(), b"standard definition");
}

#[tokio::test]
async fn no_tier_available_is_thumbnail_unavailable() {
    let base = common::image_server::start(HashMap::new());
    let cfg = config_for(&base);
    let source = CurlImageSource::from_config(&cfg);
    let dir = tempdir().unwrap();
    let mut s = Session::from_config(&cfg);

    drive(
        &mut s,
        &source,
        dir.path(),
        Event::Submit(format!("https://www.youtube.com/embed/{ID}")),
    )
    .await;
    assert_eq!(
        s.state(),
        SessionState::Error(ErrorKind::ThumbnailUnavailable)
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn save_of_missing_address_is_download_failed() {
    let base = common::image_server::start(HashMap::new());
    let cfg = config_for(&base);
    let dir = tempdir().unwrap();
    let address = format!("{base}/vi/{ID}/maxresdefault.jpg");

    let result = tokio::task::spawn_blocking({
        let dir = dir.path().to_path_buf();
        move || {
            let source = CurlImageSource::from_config(&cfg);
            save::save(&source, &address, &dir, Some(ID), false)
        }
    })
    .await
    .expect("join");

    assert_eq!(result, Err(ThumbError::DownloadFailed));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn probe_reports_headers() {
    let base = common::image_server::start(HashMap::from([(
        "/vi/x/maxresdefault.jpg".to_string(),
        vec![0u8; 321],
    )]));
    let source = CurlImageSource::from_config(&config_for(&base));
    let head = source
        .probe(&format!("{base}/vi/x/maxresdefault.jpg"))
        .unwrap();
    assert_eq!(head.content_length, Some(321));
    assert_eq!(head.content_type.as_deref(), Some("image/jpeg"));
}

#[test]
fn unreachable_host_is_unknown_on_save() {
    // Bind then drop to get a local port nothing is listening on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let cfg = ThumbConfig {
        connect_timeout_secs: 2,
        timeout_secs: 3,
        ..ThumbConfig::default()
    };
    let source = CurlImageSource::from_config(&cfg);
    let dir = tempdir().unwrap();
    let err = save::save(
        &source,
        &format!("http://127.0.0.1:{port}/vi/x/maxresdefault.jpg"),
        dir.path(),
        None,
        false,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert!(!err.to_string().is_empty());
}
