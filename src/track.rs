//! Track identity and bookkeeping types.
//!
//! A transition is realized by up to three parallel tracks, each driving one
//! visual component of the panel. Tracks are identified by an opaque
//! [`TrackId`] so the controller can key its interrupted-progress map and
//! remove tracks on completion without reference identity.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::easing::TimingCurve;

/// The two stable states of the panel.
///
/// "In transition" is not a third state: the controller commits the target
/// state the moment a transition starts and a non-empty track set marks the
/// transition as in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Collapsed,
    Expanded,
}

impl PanelState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::Collapsed
    }
}

/// Unique identifier for an animation track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u64);

impl TrackId {
    /// Generate a new unique track ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which visual component a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    /// Panel top offset; applying its end state runs a layout pass.
    Frame,
    /// Background blur amount.
    Blur,
    /// Top corner rounding.
    Corner,
}

/// Descriptor for one running animation track.
///
/// `target` is the state committed when the track was created. Reversal
/// flips the direction of travel on the engine but not this axis; the
/// track's timeline always runs from `target.toggled()` at fraction 0 to
/// `target` at fraction 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub kind: TrackKind,
    pub target: PanelState,
    pub duration_ms: f32,
    pub curve: TimingCurve,
}

impl Track {
    /// Create a track descriptor with a fresh ID.
    pub fn new(kind: TrackKind, target: PanelState, duration_ms: f32, curve: TimingCurve) -> Self {
        Self {
            id: TrackId::new(),
            kind,
            target,
            duration_ms,
            curve,
        }
    }
}
