//! Resolution fallback: Primary, then Secondary, then give up.
//!
//! Failure signals carry the address they refer to. A signal for any address
//! other than the one currently exposed is stale (e.g. it belongs to an id
//! that has since been replaced) and is ignored.

use crate::tier::{thumbnail_url, Tier};
use crate::video_id::VideoId;

/// Where the controller is for its current id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackState {
    /// Exposing the address for this tier.
    Trying(Tier),
    /// Every tier failed. Absorbing until a new id is set.
    Exhausted,
}

/// Result of reporting a load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Stale or redundant signal; nothing changed.
    Ignored,
    /// Moved to the next tier; load this address next.
    Advanced { tier: Tier, address: String },
    /// No tiers left; the thumbnail is unavailable.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct FallbackController {
    base: String,
    id: VideoId,
    state: FallbackState,
    /// When false, a Primary failure is terminal.
    allow_fallback: bool,
}

impl FallbackController {
    pub fn new(base: impl Into<String>, id: VideoId) -> Self {
        Self {
            base: base.into(),
            id,
            state: FallbackState::Trying(Tier::Primary),
            allow_fallback: true,
        }
    }

    pub fn with_fallback(mut self, allow: bool) -> Self {
        self.allow_fallback = allow;
        self
    }

    /// Switch to a new id and start over at Primary.
    pub fn reset(&mut self, id: VideoId) {
        tracing::debug!(%id, "fallback reset to primary");
        self.id = id;
        self.state = FallbackState::Trying(Tier::Primary);
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn state(&self) -> FallbackState {
        self.state
    }

    /// The tier currently exposed, or `None` once exhausted.
    pub fn tier(&self) -> Option<Tier> {
        match self.state {
            FallbackState::Trying(tier) => Some(tier),
            FallbackState::Exhausted => None,
        }
    }

    /// The address the consumer should load, or `None` once exhausted.
    pub fn current_address(&self) -> Option<String> {
        self.tier().map(|t| thumbnail_url(&self.base, &self.id, t))
    }

    /// True if `address` is the one currently exposed.
    pub fn is_current(&self, address: &str) -> bool {
        self.current_address().as_deref() == Some(address)
    }

    /// Record that loading `address` failed.
    pub fn report_failure(&mut self, address: &str) -> FailureOutcome {
        let tier = match self.state {
            FallbackState::Trying(tier) => tier,
            FallbackState::Exhausted => return FailureOutcome::Ignored,
        };
        if !self.is_current(address) {
            tracing::debug!(address, "ignoring stale failure signal");
            return FailureOutcome::Ignored;
        }

        let next = if self.allow_fallback { tier.next() } else { None };
        match next {
            Some(next) => {
                self.state = FallbackState::Trying(next);
                let address = thumbnail_url(&self.base, &self.id, next);
                tracing::info!(id = %self.id, %tier, %next, "thumbnail tier failed, falling back");
                FailureOutcome::Advanced {
                    tier: next,
                    address,
                }
            }
            None => {
                self.state = FallbackState::Exhausted;
                tracing::warn!(id = %self.id, "no thumbnail tier available");
                FailureOutcome::Exhausted
            }
        }
    }
}
