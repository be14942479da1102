//! Display and demo-flight parameters, loadable from JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors raised while loading, saving or validating [`Params`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the parameter file failed.
    #[error("parameter file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter file is not valid JSON for [`Params`].
    #[error("malformed parameter file: {0}")]
    Json(#[from] serde_json::Error),
    /// A field holds a value the display cannot work with.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Parameters for the altitude indicator and the simulated vehicle driving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Indicator horizontal offset from its anchor.
    pub indicator_x_offset: f32,
    /// Indicator vertical offset from its anchor. Ignored when `indicator_fixed_height` is set.
    pub indicator_y_offset: f32,
    /// Indicator width.
    pub indicator_width: f32,
    /// Indicator height.
    pub indicator_height: f32,
    /// Pin the indicator to a fixed screen height (vertical offset 0).
    pub indicator_fixed_height: bool,
    /// Starting altitude ceiling. Must be strictly positive.
    pub initial_max_altitude: f32,
    /// Upward acceleration produced by the engine at full thrust.
    pub thrust_acceleration: f32,
    /// Downward acceleration applied every step.
    pub gravity: f32,
    /// Amplitude of the random acceleration jitter.
    pub turbulence: f32,
    /// Simulation time advanced per frame, in seconds.
    pub time_step: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            indicator_x_offset: -40.0,
            indicator_y_offset: 20.0,
            indicator_width: 40.0,
            indicator_height: 200.0,
            indicator_fixed_height: false,
            initial_max_altitude: 100.0,
            thrust_acceleration: 30.0,
            gravity: 9.81,
            turbulence: 2.0,
            time_step: 1.0 / 60.0,
        }
    }
}

impl Params {
    /// Checks every field the display relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("indicator_x_offset", self.indicator_x_offset),
            ("indicator_y_offset", self.indicator_y_offset),
            ("indicator_width", self.indicator_width),
            ("indicator_height", self.indicator_height),
            ("initial_max_altitude", self.initial_max_altitude),
            ("thrust_acceleration", self.thrust_acceleration),
            ("gravity", self.gravity),
            ("turbulence", self.turbulence),
            ("time_step", self.time_step),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        if self.initial_max_altitude <= 0.0 {
            return Err(invalid(
                "initial_max_altitude",
                format!("must be positive, got {}", self.initial_max_altitude),
            ));
        }
        if self.indicator_width < 0.0 {
            return Err(invalid(
                "indicator_width",
                format!("must not be negative, got {}", self.indicator_width),
            ));
        }
        if self.indicator_height < 0.0 {
            return Err(invalid(
                "indicator_height",
                format!("must not be negative, got {}", self.indicator_height),
            ));
        }
        if self.turbulence < 0.0 {
            return Err(invalid(
                "turbulence",
                format!("must not be negative, got {}", self.turbulence),
            ));
        }
        if self.time_step <= 0.0 {
            return Err(invalid(
                "time_step",
                format!("must be positive, got {}", self.time_step),
            ));
        }
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        tracing::info!("loaded display parameters from {}", path.display());
        Ok(params)
    }

    /// Writes the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::info!("saved display parameters to {}", path.display());
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
