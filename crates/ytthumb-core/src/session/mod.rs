//! Session state machine: input text in, saved thumbnail out.
//!
//! States are `Idle`, `Extracting`, `Displaying { tier }`, `Error(kind)` and
//! `Downloading`. [`Session::handle`] applies one [`Event`] and returns the
//! I/O the caller should perform next as an [`Effect`]; the caller reports
//! the outcome back as another event. Events that refer to an address other
//! than the current one are stale and leave the session unchanged.

mod effect;

pub use effect::perform;

use std::path::PathBuf;

use crate::config::ThumbConfig;
use crate::error::{ErrorKind, ThumbError};
use crate::fallback::{FailureOutcome, FallbackController};
use crate::tier::Tier;
use crate::video_id::{self, VideoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Held while submitted text is being parsed.
    Extracting,
    /// An address for `tier` is exposed. `loaded` once the image load succeeded.
    Displaying { tier: Tier, loaded: bool },
    Error(ErrorKind),
    /// Saving the displayed `tier`.
    Downloading { tier: Tier },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User submitted text.
    Submit(String),
    /// The image at this address loaded.
    ImageLoaded(String),
    /// The image at this address failed to load.
    ImageFailed(String),
    /// User asked to save the displayed image.
    DownloadRequested,
    /// A save of `address` finished.
    DownloadFinished {
        address: String,
        result: Result<PathBuf, ThumbError>,
    },
    /// User cleared the input.
    Clear,
}

/// I/O requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load (probe) this image address.
    LoadImage { address: String },
    /// Fetch this address and save it as `<file_stem>.jpg`.
    Save {
        address: String,
        file_stem: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct Session {
    base: String,
    allow_fallback: bool,
    state: SessionState,
    controller: Option<FallbackController>,
    error: Option<ThumbError>,
    saved: Option<PathBuf>,
}

impl Session {
    pub fn new(base: impl Into<String>, allow_fallback: bool) -> Self {
        Self {
            base: base.into(),
            allow_fallback,
            state: SessionState::Idle,
            controller: None,
            error: None,
            saved: None,
        }
    }

    pub fn from_config(cfg: &ThumbConfig) -> Self {
        Self::new(cfg.thumbnail_base.clone(), cfg.fallback)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.controller.as_ref().map(|c| c.id())
    }

    /// The address currently shown (or being loaded), if any.
    pub fn thumbnail_address(&self) -> Option<String> {
        match self.state {
            SessionState::Displaying { .. } | SessionState::Downloading { .. } => {
                self.controller.as_ref().and_then(|c| c.current_address())
            }
            _ => None,
        }
    }

    /// The error behind `SessionState::Error`.
    pub fn error(&self) -> Option<&ThumbError> {
        self.error.as_ref()
    }

    /// Path of the most recent successful save for the current id.
    pub fn saved_path(&self) -> Option<&PathBuf> {
        self.saved.as_ref()
    }

    /// Apply one event. Returns the next I/O to perform, if any.
    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        let before = self.state;
        let effect = match event {
            Event::Submit(text) => self.on_submit(&text),
            Event::ImageLoaded(address) => self.on_loaded(&address),
            Event::ImageFailed(address) => self.on_failed(&address),
            Event::DownloadRequested => self.on_download_requested(),
            Event::DownloadFinished { address, result } => self.on_download_finished(&address, result),
            Event::Clear => {
                *self = Session::new(std::mem::take(&mut self.base), self.allow_fallback);
                None
            }
        };
        if before != self.state {
            tracing::debug!(from = ?before, to = ?self.state, "session transition");
        }
        effect
    }

    fn fail(&mut self, err: ThumbError) {
        self.state = SessionState::Error(err.kind());
        self.error = Some(err);
    }

    fn on_submit(&mut self, text: &str) -> Option<Effect> {
        self.state = SessionState::Extracting;
        self.error = None;
        self.saved = None;

        match video_id::extract(text) {
            Ok(id) => {
                let controller = match self.controller.take() {
                    Some(mut c) => {
                        c.reset(id);
                        c
                    }
                    None => FallbackController::new(self.base.clone(), id)
                        .with_fallback(self.allow_fallback),
                };
                // A fresh or reset controller always exposes its Primary address.
                let address = match controller.current_address() {
                    Some(address) => address,
                    None => {
                        self.controller = None;
                        self.fail(ThumbError::ThumbnailUnavailable);
                        return None;
                    }
                };
                self.controller = Some(controller);
                self.state = SessionState::Displaying {
                    tier: Tier::Primary,
                    loaded: false,
                };
                Some(Effect::LoadImage { address })
            }
            Err(e) => {
                self.controller = None;
                self.fail(e.into());
                None
            }
        }
    }

    fn on_loaded(&mut self, address: &str) -> Option<Effect> {
        if let SessionState::Displaying { tier, loaded: false } = self.state {
            if self.controller.as_ref().is_some_and(|c| c.is_current(address)) {
                self.state = SessionState::Displaying { tier, loaded: true };
            }
        }
        None
    }

    fn on_failed(&mut self, address: &str) -> Option<Effect> {
        if !matches!(self.state, SessionState::Displaying { loaded: false, .. }) {
            return None;
        }
        let controller = self.controller.as_mut()?;
        match controller.report_failure(address) {
            FailureOutcome::Ignored => None,
            FailureOutcome::Advanced { tier, address } => {
                self.state = SessionState::Displaying { tier, loaded: false };
                Some(Effect::LoadImage { address })
            }
            FailureOutcome::Exhausted => {
                self.fail(ThumbError::ThumbnailUnavailable);
                None
            }
        }
    }

    fn on_download_requested(&mut self) -> Option<Effect> {
        let SessionState::Displaying { tier, loaded: true } = self.state else {
            return None;
        };
        let controller = self.controller.as_ref()?;
        let address = controller.current_address()?;
        let file_stem = Some(controller.id().to_string());
        self.state = SessionState::Downloading { tier };
        Some(Effect::Save { address, file_stem })
    }

    fn on_download_finished(
        &mut self,
        address: &str,
        result: Result<PathBuf, ThumbError>,
    ) -> Option<Effect> {
        let SessionState::Downloading { tier } = self.state else {
            return None;
        };
        if !self.controller.as_ref().is_some_and(|c| c.is_current(address)) {
            return None;
        }
        match result {
            Ok(path) => {
                self.saved = Some(path);
                self.state = SessionState::Displaying { tier, loaded: true };
            }
            Err(e) => self.fail(e),
        }
        None
    }
}
