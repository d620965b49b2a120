//! Engine tunables: zoom limits, gesture thresholds, minimum shape size.
//!
//! Defaults come from [`crate::consts`]. The host may override any subset via
//! JSON; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CLICK_THRESHOLD_PX, MAX_ZOOM, MIN_SHAPE_SIZE_PCT, MIN_ZOOM, WHEEL_ZOOM_SENSITIVITY, ZOOM_STEP_FACTOR,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid zoom range: min {min} must be positive and below max {max}")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("zoom range {min}..{max} must include the unzoomed scale 1")]
    ExcludesUnitScale { min: f64, max: f64 },
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("zoom_step_factor must be greater than 1, got {0}")]
    StepFactorTooSmall(f64),
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the interaction engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplier per zoom-in step (divisor per zoom-out step).
    pub zoom_step_factor: f64,
    /// Scale change per wheel pixel.
    pub wheel_sensitivity: f64,
    /// Per-axis screen pixels below which a press/release is a click.
    pub click_threshold_px: f64,
    /// Drawn shapes must exceed this size (image percent) on both axes.
    pub min_shape_size_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step_factor: ZOOM_STEP_FACTOR,
            wheel_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            click_threshold_px: CLICK_THRESHOLD_PX,
            min_shape_size_pct: MIN_SHAPE_SIZE_PCT,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl EngineConfig {
    /// Check every field, returning the config unchanged if it is usable.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.min_zoom.is_finite() && self.max_zoom.is_finite() && self.min_zoom > 0.0 && self.min_zoom < self.max_zoom) {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        // Reset returns to scale 1, and `scale > 1` means zoomed in.
        if self.min_zoom > 1.0 || self.max_zoom < 1.0 {
            return Err(ConfigError::ExcludesUnitScale { min: self.min_zoom, max: self.max_zoom });
        }
        if !(self.zoom_step_factor.is_finite() && self.zoom_step_factor > 1.0) {
            return Err(ConfigError::StepFactorTooSmall(self.zoom_step_factor));
        }
        positive("wheel_sensitivity", self.wheel_sensitivity)?;
        positive("click_threshold_px", self.click_threshold_px)?;
        positive("min_shape_size_pct", self.min_shape_size_pct)?;
        Ok(self)
    }

    /// Parse a (possibly partial) JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or a validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }
}
