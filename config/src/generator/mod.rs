//! Tunable generator settings shared with the mesh crate.
//!
//! The jitter magnitudes are aesthetic knobs rather than a compatibility
//! contract, so they live in a value object the caller may override.

use crate::constants::{AXIS_JITTER, BOUNDARY_JITTER, MAX_VERTICES, SHAPE_JITTER, TILT_JITTER};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable snapshot of the randomization bands and limits used when
/// building a stalk.
///
/// # Examples
/// ```
/// use config::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.shape_jitter > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Relative band for the waist, ridge and radius multipliers.
    pub shape_jitter: f64,
    /// Segment boundary band, as a fraction of the ridge height fraction.
    pub boundary_jitter: f64,
    /// Relative band for the per-segment tilt increment.
    pub tilt_jitter: f64,
    /// Relative band for the post-rotation Y and Z scale.
    pub axis_jitter: f64,
    /// Largest vertex count a single build may produce.
    pub max_vertices: usize,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting negative or non-finite bands.
    ///
    /// # Examples
    /// ```
    /// use config::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(0.05, 0.1, 0.0, 0.0).expect("valid config");
    /// assert_eq!(cfg.shape_jitter, 0.05);
    /// ```
    pub fn new(
        shape_jitter: f64,
        boundary_jitter: f64,
        tilt_jitter: f64,
        axis_jitter: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            shape_jitter,
            boundary_jitter,
            tilt_jitter,
            axis_jitter,
            max_vertices: MAX_VERTICES,
        };
        config.validate()?;
        Ok(config)
    }

    /// A configuration with every band set to zero.
    ///
    /// Builds with this configuration are fully determined by the stalk
    /// parameters, whatever random source is used.
    pub fn without_jitter() -> Self {
        Self {
            shape_jitter: 0.0,
            boundary_jitter: 0.0,
            tilt_jitter: 0.0,
            axis_jitter: 0.0,
            max_vertices: MAX_VERTICES,
        }
    }

    /// Overrides the vertex limit.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Re-checks the invariants, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = [
            ("shape_jitter", self.shape_jitter),
            ("boundary_jitter", self.boundary_jitter),
            ("tilt_jitter", self.tilt_jitter),
            ("axis_jitter", self.axis_jitter),
        ];
        for (name, value) in bands {
            // A band of 1.0 or more could flip a multiplier's sign.
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidJitter { name, value });
            }
        }
        if self.max_vertices == 0 {
            return Err(ConfigError::InvalidLimit(self.max_vertices));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shape_jitter: SHAPE_JITTER,
            boundary_jitter: BOUNDARY_JITTER,
            tilt_jitter: TILT_JITTER,
            axis_jitter: AXIS_JITTER,
            max_vertices: MAX_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when a jitter band is negative, non-finite or not below 1.
    #[error("{name} must be finite and in [0, 1): {value}")]
    InvalidJitter { name: &'static str, value: f64 },
    /// Raised when the vertex limit is zero.
    #[error("max_vertices must be positive: {0}")]
    InvalidLimit(usize),
}
