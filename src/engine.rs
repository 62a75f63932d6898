//! Animation engine seam and the default frame-driven implementation.
//!
//! The controller never talks to a host animation facility directly; it
//! drives whatever implements [`AnimationEngine`]. The capability set is
//! deliberately small: start, pause, resume with a new curve, direction
//! reversal, and direct read/write of fractional completion for
//! gesture-driven scrubbing.
//!
//! [`TimelineEngine`] is the built-in implementation: a per-frame engine
//! advanced by `update(delta_ms)`. It is deterministic under synthetic
//! advancement, which is how the unit tests drive the controller.

use std::collections::HashMap;

use crate::easing::TimingCurve;
use crate::track::{Track, TrackId};

/// Host animation facility as seen by the controller.
///
/// Fractional completion runs along the track's own axis: 0 at the origin
/// state, 1 at the state committed when the track was created. Reversing a
/// track flips its direction of travel without moving its current fraction.
pub trait AnimationEngine {
    /// Begin playback for a newly created track.
    fn start(&mut self, track: &Track);

    /// Freeze playback position. Must not alter end-state semantics.
    fn pause(&mut self, id: TrackId);

    /// Resume playback from the current fraction with a new curve.
    ///
    /// A `duration_factor` of 0 keeps the track's own duration (natural
    /// remaining time); a positive factor rescales it.
    fn resume(&mut self, id: TrackId, curve: TimingCurve, duration_factor: f32);

    /// Flip the direction of travel in place.
    fn reverse(&mut self, id: TrackId);

    /// Current fractional completion, 0.0 to 1.0.
    fn fraction(&self, id: TrackId) -> f32;

    /// Scrub directly to a fractional completion. Values outside [0, 1]
    /// are clamped.
    fn set_fraction(&mut self, id: TrackId, fraction: f32);

    /// Fractional completion mapped through the track's timing curve.
    fn eased_fraction(&self, id: TrackId) -> f32;

    /// Take the tracks that finished since the last poll. A reversed track
    /// finishes when it runs back to fraction 0.
    fn poll_finished(&mut self) -> Vec<TrackId>;
}

/// Playback lifecycle of one track inside [`TimelineEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackState {
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone)]
struct Playback {
    fraction: f32,
    duration_ms: f32,
    curve: TimingCurve,
    reversed: bool,
    state: PlaybackState,
}

impl Playback {
    /// Advance by `delta_ms`. Returns true when this step finished the
    /// track.
    fn advance(&mut self, delta_ms: f32) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }

        if self.duration_ms <= 0.0 {
            self.fraction = if self.reversed { 0.0 } else { 1.0 };
            self.state = PlaybackState::Finished;
            return true;
        }

        let step = delta_ms / self.duration_ms;
        if self.reversed {
            self.fraction -= step;
            if self.fraction <= 0.0 {
                self.fraction = 0.0;
                self.state = PlaybackState::Finished;
                return true;
            }
        } else {
            self.fraction += step;
            if self.fraction >= 1.0 {
                self.fraction = 1.0;
                self.state = PlaybackState::Finished;
                return true;
            }
        }

        false
    }
}

/// Frame-driven animation engine.
///
/// Call [`TimelineEngine::update`] once per frame with the elapsed
/// milliseconds, then let the controller collect completions via
/// [`AnimationEngine::poll_finished`].
#[derive(Debug, Default)]
pub struct TimelineEngine {
    playbacks: HashMap<TrackId, Playback>,
    finished: Vec<TrackId>,
}

impl TimelineEngine {
    /// Create an engine with no running tracks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all running tracks by `delta_ms`.
    pub fn update(&mut self, delta_ms: f32) {
        for (id, playback) in self.playbacks.iter_mut() {
            if playback.advance(delta_ms) {
                self.finished.push(*id);
            }
        }
    }

    /// Number of tracks the engine still holds (running, paused, or
    /// finished-but-unpolled).
    pub fn track_count(&self) -> usize {
        self.playbacks.len()
    }

    /// Whether a track is currently paused.
    pub fn is_paused(&self, id: TrackId) -> bool {
        self.playbacks
            .get(&id)
            .is_some_and(|p| p.state == PlaybackState::Paused)
    }

    /// Whether a track is currently reversed.
    pub fn is_reversed(&self, id: TrackId) -> bool {
        self.playbacks.get(&id).is_some_and(|p| p.reversed)
    }
}

impl AnimationEngine for TimelineEngine {
    fn start(&mut self, track: &Track) {
        self.playbacks.insert(
            track.id,
            Playback {
                fraction: 0.0,
                duration_ms: track.duration_ms,
                curve: track.curve,
                reversed: false,
                state: PlaybackState::Running,
            },
        );
    }

    fn pause(&mut self, id: TrackId) {
        if let Some(playback) = self.playbacks.get_mut(&id) {
            if playback.state == PlaybackState::Running {
                playback.state = PlaybackState::Paused;
            }
        }
    }

    fn resume(&mut self, id: TrackId, curve: TimingCurve, duration_factor: f32) {
        if let Some(playback) = self.playbacks.get_mut(&id) {
            if playback.state == PlaybackState::Finished {
                return;
            }
            playback.curve = curve;
            if duration_factor > 0.0 {
                playback.duration_ms *= duration_factor;
            }
            playback.state = PlaybackState::Running;
        }
    }

    fn reverse(&mut self, id: TrackId) {
        if let Some(playback) = self.playbacks.get_mut(&id) {
            playback.reversed = !playback.reversed;
        }
    }

    fn fraction(&self, id: TrackId) -> f32 {
        self.playbacks.get(&id).map_or(0.0, |p| p.fraction)
    }

    fn set_fraction(&mut self, id: TrackId, fraction: f32) {
        if let Some(playback) = self.playbacks.get_mut(&id) {
            playback.fraction = fraction.clamp(0.0, 1.0);
        }
    }

    fn eased_fraction(&self, id: TrackId) -> f32 {
        self.playbacks
            .get(&id)
            .map_or(0.0, |p| p.curve.evaluate(p.fraction))
    }

    fn poll_finished(&mut self) -> Vec<TrackId> {
        let finished = std::mem::take(&mut self.finished);
        for id in &finished {
            self.playbacks.remove(id);
        }
        finished
    }
}
