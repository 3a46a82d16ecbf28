//! Engine tunables with defaults, loadable from a partial JSON object.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, HANDLE_SIZE_PX, ROTATE_HANDLE_OFFSET_PX, ROTATE_HANDLE_RADIUS_PX,
    WORLD_HEIGHT, WORLD_WIDTH, ZOOM_INTENSITY,
};
use crate::error::ConfigError;

/// Tunables for world size, handle geometry, zoom, and new-object presentation.
///
/// Every field is optional in JSON; missing fields take the defaults from
/// [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub handle_size_px: f64,
    pub rotate_handle_distance_px: f64,
    pub rotate_handle_radius_px: f64,
    pub zoom_intensity: f64,
    pub default_color: String,
    pub default_stroke_width: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            handle_size_px: HANDLE_SIZE_PX,
            rotate_handle_distance_px: ROTATE_HANDLE_OFFSET_PX,
            rotate_handle_radius_px: ROTATE_HANDLE_RADIUS_PX,
            zoom_intensity: ZOOM_INTENSITY,
            default_color: DEFAULT_COLOR.to_owned(),
            default_stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::NonPositive`] for any size or intensity that is not a
    /// finite positive number.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric tunable is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("handle_size_px", self.handle_size_px),
            ("rotate_handle_distance_px", self.rotate_handle_distance_px),
            ("rotate_handle_radius_px", self.rotate_handle_radius_px),
            ("zoom_intensity", self.zoom_intensity),
            ("default_stroke_width", self.default_stroke_width),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}
