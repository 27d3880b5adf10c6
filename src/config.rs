//! Grid configuration.
//!
//! Loaded from JSON. Every field has a default, so `{}` is a valid config.
//!
//! ```ignore
//! let config = GridConfig::from_json_str(r#"{ "sticky": { "hysteresis_threshold": 80 } }"#)?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

// =============================================================================
// SECTIONS
// =============================================================================

/// Entrance animation constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_seconds: f64,
    pub stagger_delay_seconds: f64,
    pub distance_offset: f64,
    /// Offset used by the nav region's own entrance.
    pub nav_distance_offset: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 0.7,
            stagger_delay_seconds: 0.04,
            distance_offset: 40.0,
            nav_distance_offset: 10.0,
        }
    }
}

/// Sticky nav tuning. The threshold is a tunable, not a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Downward distance since the last reversal required before hiding.
    pub hysteresis_threshold: f64,
    /// Nav height. The nav never hides while scroll position is within it.
    pub nav_height: f64,
    /// Natural resting offset of the nav. Docked at or beyond it.
    pub resting_offset: f64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            hysteresis_threshold: 60.0,
            nav_height: 64.0,
            resting_offset: 64.0,
        }
    }
}

/// Tile layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of leading tiles marked as load priority.
    pub prioritized_tiles: usize,
    /// Fixed tile aspect ratio. 0 keeps each photo's own ratio.
    pub aspect_ratio: f64,
    pub high_density: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            prioritized_tiles: 6,
            aspect_ratio: 0.0,
            high_density: false,
        }
    }
}

impl LayoutConfig {
    /// Whether tiles keep their own aspect ratio.
    pub fn is_adaptive(&self) -> bool {
        self.aspect_ratio == 0.0
    }
}

// =============================================================================
// GRID CONFIG
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub animation: AnimationConfig,
    pub sticky: StickyConfig,
    pub layout: LayoutConfig,
}

impl GridConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded grid config");
        Ok(config)
    }

    pub fn validate(&self) -> GridResult<()> {
        let a = &self.animation;
        non_negative("animation.duration_seconds", a.duration_seconds)?;
        non_negative("animation.stagger_delay_seconds", a.stagger_delay_seconds)?;
        non_negative("animation.distance_offset", a.distance_offset)?;
        non_negative("animation.nav_distance_offset", a.nav_distance_offset)?;

        let s = &self.sticky;
        non_negative("sticky.hysteresis_threshold", s.hysteresis_threshold)?;
        non_negative("sticky.nav_height", s.nav_height)?;
        non_negative("sticky.resting_offset", s.resting_offset)?;
        if s.nav_height == 0.0 {
            return Err(GridError::config("sticky.nav_height must be greater than 0"));
        }

        non_negative("layout.aspect_ratio", self.layout.aspect_ratio)?;
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> GridResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GridError::config(format!(
            "{field} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}
