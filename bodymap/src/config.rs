//! Widget configuration: zoom bounds, step factors, proximity radius and
//! classifier granularity.
//!
//! Every field has a default, so `{}` is a valid configuration. Hosts pass
//! JSON through [`BodyMapConfig::from_json`], which validates before
//! returning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CENTER_BAND, MAX_ZOOM, MIN_ZOOM, NEAR_RADIUS, OVERVIEW_WIDTH, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, ZOOM_STEP};
use crate::zones::Granularity;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field is NaN, infinite, zero or negative.
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// `min_zoom` exceeds `max_zoom`.
    #[error("min_zoom {min} exceeds max_zoom {max}")]
    ZoomRange { min: f64, max: f64 },

    /// A step factor would not change zoom in the expected direction.
    #[error("{field} must be {expected}, got {value}")]
    Step { field: &'static str, expected: &'static str, value: f64 },
}

impl ConfigError {
    /// Stable machine-readable code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_CONFIG_PARSE",
            Self::NotPositive { .. } => "E_CONFIG_NOT_POSITIVE",
            Self::ZoomRange { .. } => "E_CONFIG_ZOOM_RANGE",
            Self::Step { .. } => "E_CONFIG_STEP",
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Tunables for one mounted body map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyMapConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Factor applied by the zoom buttons and `+`/`-` keys.
    pub zoom_step: f64,
    /// Factor applied per wheel notch scrolling up.
    pub wheel_zoom_in: f64,
    /// Factor applied per wheel notch scrolling down.
    pub wheel_zoom_out: f64,
    /// Marker hit radius in diagram units.
    pub near_radius: f64,
    /// Half-width of the fine classifier's midline band, diagram units.
    pub center_band: f64,
    /// Overview thumbnail width in CSS pixels; height follows at 1:2.
    pub overview_width: f64,
    pub granularity: Granularity,
}

impl Default for BodyMapConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            near_radius: NEAR_RADIUS,
            center_band: CENTER_BAND,
            overview_width: OVERVIEW_WIDTH,
            granularity: Granularity::default(),
        }
    }
}

impl BodyMapConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`BodyMapConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every bound and factor is usable.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("zoom_step", self.zoom_step),
            ("wheel_zoom_in", self.wheel_zoom_in),
            ("wheel_zoom_out", self.wheel_zoom_out),
            ("near_radius", self.near_radius),
            ("center_band", self.center_band),
            ("overview_width", self.overview_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if self.zoom_step <= 1.0 {
            return Err(ConfigError::Step { field: "zoom_step", expected: "greater than 1", value: self.zoom_step });
        }
        if self.wheel_zoom_in <= 1.0 {
            return Err(ConfigError::Step { field: "wheel_zoom_in", expected: "greater than 1", value: self.wheel_zoom_in });
        }
        if self.wheel_zoom_out >= 1.0 {
            return Err(ConfigError::Step {
                field: "wheel_zoom_out",
                expected: "between 0 and 1",
                value: self.wheel_zoom_out,
            });
        }
        Ok(())
    }

    /// Clamp a zoom factor into `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
