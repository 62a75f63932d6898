//! Interruptible, gesture-driven panel transition.
//!
//! One state machine coordinates three property-animation tracks (frame
//! offset, blur, corner radius) realizing a collapsed ⇄ expanded panel
//! transition that a tap can reverse mid-flight and a pan gesture can
//! pause, scrub, and release in either direction.
//!
//! # Architecture
//!
//! ```text
//! PanelController (state machine)
//!   ├── Active track set (frame / blur / corner)
//!   ├── Interrupted-progress map (pan-begin snapshots)
//!   └── EventQueue (started / reversed / track finished / settled)
//!
//! AnimationEngine (injected seam)
//!   └── TimelineEngine: frame-driven default, advanced by update(delta_ms)
//!
//! PanelSurface (injected collaborator)
//!   └── Receives committed end-state values; owns the view plumbing
//! ```
//!
//! # Usage
//!
//! ```
//! use panel_transition::{
//!     PanGesture, PanelConfig, PanelController, PanelMetrics, PanelSurface,
//!     TimelineEngine,
//! };
//!
//! struct Surface;
//! impl PanelSurface for Surface {
//!     fn apply_frame(&mut self, _top_offset: f64) {}
//!     fn apply_blur(&mut self, _amount: f32) {}
//!     fn apply_corner_radius(&mut self, _radius: f64) {}
//! }
//!
//! let config = PanelConfig::default();
//! let metrics = PanelMetrics::from_container(730.0, &config);
//! let mut controller = PanelController::new(config, metrics);
//! let mut engine = TimelineEngine::new();
//! let mut surface = Surface;
//!
//! // Tap to expand, then drive the engine each frame.
//! controller.handle_tap(&mut engine, &mut surface);
//! engine.update(16.67);
//! controller.process_completions(&mut engine, &mut surface);
//! let visuals = controller.visuals(&engine);
//! # let _ = visuals;
//! ```

pub mod config;
pub mod controller;
pub mod easing;
pub mod engine;
pub mod events;
pub mod gesture;
pub mod track;
pub mod visuals;

pub use config::{ConfigError, PanelConfig};
pub use controller::PanelController;
pub use easing::TimingCurve;
pub use engine::{AnimationEngine, TimelineEngine};
pub use events::{EventQueue, TransitionEvent};
pub use gesture::{PanGesture, PanPhase};
pub use track::{PanelState, Track, TrackId, TrackKind};
pub use visuals::{PanelMetrics, PanelSurface, PanelVisuals};
