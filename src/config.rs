//! Panel transition configuration.
//!
//! Tunables load from a TOML file (`panel.toml` by default) with serde
//! defaults, so a partial file only overrides what it names. Missing files
//! fall back to the built-in constants; malformed files warn and fall back.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const DEFAULT_COLLAPSED_OFFSET: f64 = -55.0;
const DEFAULT_EXPANDED_TOP_MARGIN: f64 = -75.0;
const DEFAULT_DURATION_MS: f32 = 575.0;
const DEFAULT_CORNER_RADIUS: f64 = 12.0;

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable constants for the panel transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Panel top offset while collapsed, in device-independent units.
    pub collapsed_offset: f64,
    /// Top margin subtracted from the container height to size the
    /// expanded control.
    pub expanded_top_margin: f64,
    /// Duration of a full collapsed/expanded transition.
    pub duration_ms: f32,
    /// Corner rounding of the expanded panel.
    pub corner_radius: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            collapsed_offset: DEFAULT_COLLAPSED_OFFSET,
            expanded_top_margin: DEFAULT_EXPANDED_TOP_MARGIN,
            duration_ms: DEFAULT_DURATION_MS,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl PanelConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is absent or malformed. Malformed files are logged.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(error) => {
                tracing::warn!(?error, path = ?path.as_ref(), "failed to load panel config, using defaults");
                Self::default()
            }
        }
    }
}
