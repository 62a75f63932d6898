//! Timing curves for animation pacing.
//!
//! The standard CSS curves plus custom cubic beziers. A curve maps a linear
//! timeline fraction (0.0 to 1.0) to an eased presentation fraction; the
//! blur track in particular uses a pair of asymmetric custom beziers rather
//! than a mirrored ease.

use serde::{Deserialize, Serialize};

/// Timing curve for a single animation track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimingCurve {
    /// No easing.
    Linear,

    /// CSS `ease`: `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,

    /// CSS `ease-in`: `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// CSS `ease-out`: `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// CSS `ease-in-out`: `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier through control points `(x1, y1)` and `(x2, y2)`.
    /// The x components must lie in [0, 1].
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::Ease
    }
}

impl TimingCurve {
    /// Create a custom cubic bezier curve.
    ///
    /// # Panics
    /// Panics if `x1` or `x2` are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Evaluate the curve at timeline fraction `t`.
    ///
    /// Input is clamped to [0, 1]; output is 0 at 0 and 1 at 1 for every
    /// curve variant.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::Ease => UnitBezier::new(0.25, 0.1, 0.25, 1.0).solve(t),
            Self::EaseIn => UnitBezier::new(0.42, 0.0, 1.0, 1.0).solve(t),
            Self::EaseOut => UnitBezier::new(0.0, 0.0, 0.58, 1.0).solve(t),
            Self::EaseInOut => UnitBezier::new(0.42, 0.0, 0.58, 1.0).solve(t),
            Self::CubicBezier { x1, y1, x2, y2 } => UnitBezier::new(x1, y1, x2, y2).solve(t),
        }
    }
}

/// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1) with precomputed
/// polynomial coefficients.
#[derive(Debug, Clone, Copy)]
struct UnitBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl UnitBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self { ax, bx, cx, ay, by, cy }
    }

    #[inline]
    fn sample_x(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    #[inline]
    fn sample_y(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    #[inline]
    fn sample_x_derivative(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Newton-Raphson on the x polynomial, then evaluate y at the found
    /// parameter.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < 1e-6 {
                break;
            }
            let slope = self.sample_x_derivative(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        self.sample_y(t)
    }
}
