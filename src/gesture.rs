//! Phased pan gesture input.
//!
//! The host's gesture recognizer delivers one [`PanGesture`] per phase
//! callback. Translation and velocity are vertical components in the same
//! units as the panel geometry; positive y is downward.

use serde::{Deserialize, Serialize};

/// Recognition phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanPhase {
    Began,
    Changed,
    Cancelled,
    Failed,
    Ended,
}

/// One pan gesture callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanGesture {
    pub phase: PanPhase,
    /// Vertical drag distance since the gesture began.
    pub translation_y: f64,
    /// Instantaneous vertical velocity, sampled at `Ended`.
    pub velocity_y: f64,
}

impl PanGesture {
    pub fn new(phase: PanPhase, translation_y: f64, velocity_y: f64) -> Self {
        Self {
            phase,
            translation_y,
            velocity_y,
        }
    }

    /// A pan-begin callback.
    pub fn began() -> Self {
        Self::new(PanPhase::Began, 0.0, 0.0)
    }

    /// A pan-changed callback at the given drag distance.
    pub fn changed(translation_y: f64) -> Self {
        Self::new(PanPhase::Changed, translation_y, 0.0)
    }

    /// A pan-ended callback with the final translation and velocity.
    pub fn ended(translation_y: f64, velocity_y: f64) -> Self {
        Self::new(PanPhase::Ended, translation_y, velocity_y)
    }
}
