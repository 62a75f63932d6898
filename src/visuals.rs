//! Visual targets for the two panel states and the surface collaborator.
//!
//! Three visual components change across a transition: the panel's top
//! offset (layout), the backdrop blur amount, and the top corner rounding.
//! Each component maps to one animation track. The collapsed/expanded
//! target values live here, together with linear interpolation between
//! them for hosts that render intermediate frames.

use serde::{Deserialize, Serialize};

use crate::config::PanelConfig;
use crate::track::PanelState;

/// Geometry the host resolves before a transition can be scrubbed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelMetrics {
    /// Full height of the panel control.
    pub control_height: f64,
}

impl PanelMetrics {
    /// Metrics for a control filling its container minus the expanded top
    /// margin.
    pub fn from_container(container_height: f64, config: &PanelConfig) -> Self {
        Self {
            control_height: container_height + config.expanded_top_margin,
        }
    }

    /// Signed span between the collapsed anchor offset and the expanded
    /// extent. This is the denominator when converting a drag distance to
    /// a fractional completion delta.
    pub fn total_animatable_distance(&self, config: &PanelConfig) -> f64 {
        config.collapsed_offset + self.control_height
    }
}

/// The animatable visual properties of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelVisuals {
    /// Top offset of the panel.
    pub top_offset: f64,
    /// Backdrop blur, 0.0 (none) to 1.0 (full dark blur).
    pub blur_amount: f32,
    /// Rounding of the top corners.
    pub corner_radius: f64,
}

impl PanelVisuals {
    /// Target values for a stable state.
    pub fn for_state(state: PanelState, config: &PanelConfig, metrics: &PanelMetrics) -> Self {
        match state {
            PanelState::Collapsed => Self {
                top_offset: config.collapsed_offset,
                blur_amount: 0.0,
                corner_radius: 0.0,
            },
            PanelState::Expanded => Self {
                top_offset: -metrics.control_height,
                blur_amount: 1.0,
                corner_radius: config.corner_radius,
            },
        }
    }

    /// Linear blend between two visual targets at factor `t`
    /// (0.0 = self, 1.0 = to).
    pub fn mix(&self, to: &Self, t: f32) -> Self {
        Self {
            top_offset: lerp_f64(self.top_offset, to.top_offset, t),
            blur_amount: lerp_f32(self.blur_amount, to.blur_amount, t),
            corner_radius: lerp_f64(self.corner_radius, to.corner_radius, t),
        }
    }
}

#[inline]
pub(crate) fn lerp_f64(from: f64, to: f64, t: f32) -> f64 {
    from + (to - from) * t as f64
}

#[inline]
pub(crate) fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Presentation collaborator the controller applies end states to.
///
/// Implementations own the actual view plumbing; the controller only
/// pushes committed target values through this trait. `apply_frame` is
/// expected to run a synchronous layout pass.
pub trait PanelSurface {
    /// Set the panel's top offset and apply pending layout now.
    fn apply_frame(&mut self, top_offset: f64);

    /// Set the backdrop blur amount, 0.0 to 1.0.
    fn apply_blur(&mut self, amount: f32);

    /// Set the rounding of the panel's top corners.
    fn apply_corner_radius(&mut self, radius: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PanelConfig, PanelMetrics) {
        let config = PanelConfig::default();
        // 730-unit container, -75 margin: a 655-unit control.
        let metrics = PanelMetrics::from_container(730.0, &config);
        (config, metrics)
    }

    #[test]
    fn test_metrics_from_container() {
        let (config, metrics) = setup();
        assert_eq!(metrics.control_height, 655.0);
        assert_eq!(metrics.total_animatable_distance(&config), 600.0);
    }

    #[test]
    fn test_collapsed_targets() {
        let (config, metrics) = setup();
        let visuals = PanelVisuals::for_state(PanelState::Collapsed, &config, &metrics);
        assert_eq!(visuals.top_offset, -55.0);
        assert_eq!(visuals.blur_amount, 0.0);
        assert_eq!(visuals.corner_radius, 0.0);
    }

    #[test]
    fn test_expanded_targets() {
        let (config, metrics) = setup();
        let visuals = PanelVisuals::for_state(PanelState::Expanded, &config, &metrics);
        assert_eq!(visuals.top_offset, -655.0);
        assert_eq!(visuals.blur_amount, 1.0);
        assert_eq!(visuals.corner_radius, 12.0);
    }

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        let (config, metrics) = setup();
        let collapsed = PanelVisuals::for_state(PanelState::Collapsed, &config, &metrics);
        let expanded = PanelVisuals::for_state(PanelState::Expanded, &config, &metrics);

        assert_eq!(collapsed.mix(&expanded, 0.0), collapsed);
        assert_eq!(collapsed.mix(&expanded, 1.0), expanded);

        let mid = collapsed.mix(&expanded, 0.5);
        assert!((mid.top_offset - (-355.0)).abs() < 1e-9);
        assert!((mid.blur_amount - 0.5).abs() < 1e-6);
        assert!((mid.corner_radius - 6.0).abs() < 1e-9);
    }
}
