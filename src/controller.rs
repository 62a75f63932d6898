//! The panel transition controller.
//!
//! A single state machine coordinating three animation tracks (frame
//! offset, blur, corner radius) that together realize one collapsed ⇄
//! expanded transition. Two stimuli drive it: a discrete tap and a phased
//! pan gesture. The committed [`PanelState`] flips the moment a transition
//! starts; a non-empty track set is what marks the transition as in
//! flight.
//!
//! The controller owns no playback clock and no views. It drives an
//! injected [`AnimationEngine`] and applies committed end states to an
//! injected [`PanelSurface`], both passed per call.

use std::collections::HashMap;

use crate::config::PanelConfig;
use crate::easing::TimingCurve;
use crate::engine::AnimationEngine;
use crate::events::{EventQueue, TransitionEvent};
use crate::gesture::{PanGesture, PanPhase};
use crate::track::{PanelState, Track, TrackId, TrackKind};
use crate::visuals::{PanelMetrics, PanelSurface, PanelVisuals};

/// State-dependent timing for the blur track. The two directions use
/// different beziers on purpose; this is not a mirrored ease.
fn blur_curve(target: PanelState) -> TimingCurve {
    match target {
        PanelState::Collapsed => TimingCurve::cubic_bezier(0.1, 0.75, 0.25, 0.9),
        PanelState::Expanded => TimingCurve::cubic_bezier(0.75, 0.1, 0.9, 0.25),
    }
}

/// Interruptible two-state transition state machine.
#[derive(Debug)]
pub struct PanelController {
    state: PanelState,
    running: Vec<Track>,
    interrupted_progress: HashMap<TrackId, f32>,
    config: PanelConfig,
    metrics: PanelMetrics,
    events: EventQueue,
}

impl PanelController {
    /// Create a controller at rest in the collapsed state.
    pub fn new(config: PanelConfig, metrics: PanelMetrics) -> Self {
        Self {
            state: PanelState::Collapsed,
            running: Vec::new(),
            interrupted_progress: HashMap::new(),
            config,
            metrics,
            events: EventQueue::new(),
        }
    }

    /// The committed state. During a transition this is already the target.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether a transition is in flight.
    pub fn is_in_flight(&self) -> bool {
        !self.running.is_empty()
    }

    /// The currently running tracks.
    pub fn running_tracks(&self) -> &[Track] {
        &self.running
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Update panel geometry, e.g. after a container resize.
    pub fn set_metrics(&mut self, metrics: PanelMetrics) {
        self.metrics = metrics;
    }

    /// Take all pending lifecycle events in emission order.
    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        self.events.drain().collect()
    }

    /// Handle a recognized tap: start a transition toward the opposite
    /// state, or fluidly reverse the one in flight.
    pub fn handle_tap(
        &mut self,
        engine: &mut impl AnimationEngine,
        surface: &mut impl PanelSurface,
    ) {
        self.animate_or_reverse(self.state.toggled(), self.config.duration_ms, engine, surface);
    }

    /// Handle one pan gesture callback.
    pub fn handle_pan(
        &mut self,
        pan: PanGesture,
        engine: &mut impl AnimationEngine,
        surface: &mut impl PanelSurface,
    ) {
        match pan.phase {
            PanPhase::Began => {
                self.begin_interactive(self.state.toggled(), self.config.duration_ms, engine, surface)
            }
            PanPhase::Changed => self.update_interactive(pan.translation_y, engine),
            PanPhase::Cancelled | PanPhase::Failed => self.finish_interactive(true, engine),
            PanPhase::Ended => {
                let cancel = self.gesture_cancels(pan.velocity_y);
                self.finish_interactive(cancel, engine);
            }
        }
    }

    /// Start a transition toward `target` if the panel is at rest;
    /// otherwise reverse the running one.
    pub fn animate_or_reverse(
        &mut self,
        target: PanelState,
        duration_ms: f32,
        engine: &mut impl AnimationEngine,
        surface: &mut impl PanelSurface,
    ) {
        if self.running.is_empty() {
            self.start_transition_if_idle(target, duration_ms, engine, surface);
        } else {
            self.reverse_running(engine);
        }
    }

    /// Commit `target` and start the three tracks. No-op while any track
    /// is running.
    pub fn start_transition_if_idle(
        &mut self,
        target: PanelState,
        duration_ms: f32,
        engine: &mut impl AnimationEngine,
        surface: &mut impl PanelSurface,
    ) {
        if !self.running.is_empty() {
            return;
        }

        log::debug!("transition started: {:?} -> {:?}", self.state, target);
        self.state = target;

        let tracks = [
            Track::new(TrackKind::Frame, target, duration_ms, TimingCurve::EaseInOut),
            Track::new(TrackKind::Blur, target, duration_ms, blur_curve(target)),
            Track::new(TrackKind::Corner, target, duration_ms, TimingCurve::Linear),
        ];

        for track in tracks {
            engine.start(&track);
            // The animation body runs once at start, committing the end
            // state; the frame body triggers the layout pass.
            self.apply_end_state(track.kind, surface);
            self.running.push(track);
        }

        self.events.push(TransitionEvent::Started { state: target });
    }

    /// Pause the (possibly just-started) transition and snapshot each
    /// track's fractional completion for scrubbing.
    pub fn begin_interactive(
        &mut self,
        target: PanelState,
        duration_ms: f32,
        engine: &mut impl AnimationEngine,
        surface: &mut impl PanelSurface,
    ) {
        self.start_transition_if_idle(target, duration_ms, engine, surface);

        self.interrupted_progress.clear();
        for track in &self.running {
            engine.pause(track.id);
            self.interrupted_progress
                .insert(track.id, engine.fraction(track.id));
        }
    }

    /// Scrub every paused track to the position implied by the drag
    /// distance.
    pub fn update_interactive(&mut self, distance_traveled: f64, engine: &mut impl AnimationEngine) {
        let total = self.metrics.total_animatable_distance(&self.config);
        if total == 0.0 {
            return;
        }
        let fraction = (distance_traveled / total) as f32;
        log::trace!("scrub: distance {distance_traveled} fraction {fraction}");

        for track in &self.running {
            let Some(&interrupted) = self.interrupted_progress.get(&track.id) else {
                continue;
            };
            let relative = fraction + interrupted;

            let scrubbed = if (self.state == PanelState::Expanded && relative > 0.0)
                || (self.state == PanelState::Collapsed && relative < 0.0)
            {
                0.0
            } else if (self.state == PanelState::Expanded && relative < -1.0)
                || (self.state == PanelState::Collapsed && relative > 1.0)
            {
                1.0
            } else {
                fraction.abs() + interrupted
            };

            engine.set_fraction(track.id, scrubbed);
        }
    }

    /// Resume playback from the scrubbed position, reversing first when
    /// the gesture is cancelled. Tracks resume ease-out at their natural
    /// remaining duration.
    pub fn finish_interactive(&mut self, cancel: bool, engine: &mut impl AnimationEngine) {
        if cancel {
            self.reverse_running(engine);
        }

        for track in &self.running {
            engine.resume(track.id, TimingCurve::EaseOut, 0.0);
        }
    }

    /// Flip every running track's direction in place and flip the
    /// committed state. Progress is preserved; a track at 40% continues
    /// from 40% toward the original start state.
    pub fn reverse_running(&mut self, engine: &mut impl AnimationEngine) {
        for track in &self.running {
            engine.reverse(track.id);
        }

        self.state = self.state.toggled();
        log::debug!("transition reversed, now toward {:?}", self.state);
        self.events.push(TransitionEvent::Reversed { state: self.state });
    }

    /// Collect tracks the engine finished, drop them from the active set,
    /// and re-apply each one's end state unconditionally. Scrubbing and
    /// reversal can leave a track just short of its exact target values.
    pub fn process_completions(
        &mut self,
        engine: &mut impl AnimationEngine,
        surface: &mut impl PanelSurface,
    ) {
        for id in engine.poll_finished() {
            let Some(index) = self.running.iter().position(|t| t.id == id) else {
                continue;
            };
            let track = self.running.remove(index);
            self.apply_end_state(track.kind, surface);
            self.events.push(TransitionEvent::TrackFinished {
                id,
                kind: track.kind,
            });

            if self.running.is_empty() {
                log::debug!("transition settled in {:?}", self.state);
                self.events.push(TransitionEvent::Settled { state: self.state });
            }
        }
    }

    /// Current presentation values: the resting targets when idle, or a
    /// per-track blend of the two state targets at each track's eased
    /// fraction while in flight.
    pub fn visuals(&self, engine: &impl AnimationEngine) -> PanelVisuals {
        let mut visuals = PanelVisuals::for_state(self.state, &self.config, &self.metrics);

        for track in &self.running {
            let from = PanelVisuals::for_state(track.target.toggled(), &self.config, &self.metrics);
            let to = PanelVisuals::for_state(track.target, &self.config, &self.metrics);
            let blended = from.mix(&to, engine.eased_fraction(track.id));

            match track.kind {
                TrackKind::Frame => visuals.top_offset = blended.top_offset,
                TrackKind::Blur => visuals.blur_amount = blended.blur_amount,
                TrackKind::Corner => visuals.corner_radius = blended.corner_radius,
            }
        }

        visuals
    }

    /// Velocity-direction cancel policy, sampled at gesture end: a fling
    /// against the committed direction abandons the transition. Zero
    /// velocity never cancels.
    fn gesture_cancels(&self, velocity_y: f64) -> bool {
        if velocity_y == 0.0 {
            return false;
        }
        let panning_down = velocity_y > 0.0;
        (self.state == PanelState::Expanded && panning_down)
            || (self.state == PanelState::Collapsed && !panning_down)
    }

    fn apply_end_state(&self, kind: TrackKind, surface: &mut impl PanelSurface) {
        let target = PanelVisuals::for_state(self.state, &self.config, &self.metrics);
        match kind {
            TrackKind::Frame => surface.apply_frame(target.top_offset),
            TrackKind::Blur => surface.apply_blur(target.blur_amount),
            TrackKind::Corner => surface.apply_corner_radius(target.corner_radius),
        }
    }
}
