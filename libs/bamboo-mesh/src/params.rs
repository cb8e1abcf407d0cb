//! # Stalk Parameters
//!
//! The seven numbers a host passes in to describe one stalk, with the
//! host's declared ranges and the hard invariants the builder relies on.

use crate::error::MeshError;
use config::constants::{
    clamp_to, DEFAULT_RESOLUTION, DEFAULT_RIDGE_SIZE, DEFAULT_SEGMENTS, DEFAULT_SEGMENT_HEIGHT,
    DEFAULT_STALK_RADIUS, DEFAULT_TILT_DEGREES, DEFAULT_WAIST_SIZE, MIN_RESOLUTION,
    QUADS_PER_STRIP, RESOLUTION_RANGE, RIDGE_SIZE_RANGE, SEGMENTS_RANGE, SEGMENT_HEIGHT_RANGE,
    STALK_RADIUS_RANGE, STATIONS_PER_SEGMENT, TILT_RANGE, WAIST_SIZE_RANGE,
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Shape parameters of one bamboo stalk.
///
/// Missing fields fall back to the host defaults when deserializing.
///
/// # Example
///
/// ```rust
/// use bamboo_mesh::StalkParameters;
///
/// let params = StalkParameters {
///     segments: 3,
///     resolution: 8,
///     ..StalkParameters::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.vertex_count(), 3 * 8 * 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StalkParameters {
    /// Number of node segments stacked along the stalk
    pub segments: u32,
    /// Radial steps per ring
    pub resolution: u32,
    /// Base radius of the stalk
    pub stalk_radius: f64,
    /// Radius multiplier of the node bulge (>= 1)
    pub ridge_size: f64,
    /// Radius multiplier of the pinch (in (0, 1))
    pub waist_size: f64,
    /// Height of one segment
    pub height: f64,
    /// Lean added per segment, in degrees
    pub tilt: f64,
}

impl Default for StalkParameters {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            resolution: DEFAULT_RESOLUTION,
            stalk_radius: DEFAULT_STALK_RADIUS,
            ridge_size: DEFAULT_RIDGE_SIZE,
            waist_size: DEFAULT_WAIST_SIZE,
            height: DEFAULT_SEGMENT_HEIGHT,
            tilt: DEFAULT_TILT_DEGREES,
        }
    }
}

impl StalkParameters {
    /// Checks the invariants the builder depends on.
    ///
    /// This is deliberately looser than the host ranges: any value that
    /// still yields a closed, finite tube is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.segments < 1 {
            return Err(MeshError::invalid_parameter(
                "segments",
                "at least one segment is required",
            ));
        }

        if self.resolution < MIN_RESOLUTION {
            return Err(MeshError::invalid_parameter(
                "resolution",
                format!(
                    "must be at least {}: {}",
                    MIN_RESOLUTION, self.resolution
                ),
            ));
        }

        require_positive("stalk_radius", self.stalk_radius)?;
        require_positive("height", self.height)?;

        if !self.ridge_size.is_finite() || self.ridge_size < 1.0 {
            return Err(MeshError::invalid_parameter(
                "ridge_size",
                format!("must be finite and >= 1: {}", self.ridge_size),
            ));
        }

        if !self.waist_size.is_finite() || self.waist_size <= 0.0 || self.waist_size >= 1.0 {
            return Err(MeshError::invalid_parameter(
                "waist_size",
                format!("must be in (0, 1): {}", self.waist_size),
            ));
        }

        if !self.tilt.is_finite() {
            return Err(MeshError::invalid_parameter(
                "tilt",
                format!("must be finite: {}", self.tilt),
            ));
        }

        Ok(())
    }

    /// Clamps every field into the range the host declares for it.
    ///
    /// Non-finite values fall back to the field's default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bamboo_mesh::StalkParameters;
    ///
    /// let params = StalkParameters { resolution: 4, tilt: 9.0, ..Default::default() };
    /// let clamped = params.clamped();
    /// assert_eq!(clamped.resolution, 16);
    /// assert_eq!(clamped.tilt, 3.0);
    /// ```
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let real = |value: f64, fallback: f64, range: &RangeInclusive<f64>| {
            if value.is_finite() {
                clamp_to(value, range)
            } else {
                fallback
            }
        };

        Self {
            segments: clamp_to(self.segments, &SEGMENTS_RANGE),
            resolution: clamp_to(self.resolution, &RESOLUTION_RANGE),
            stalk_radius: real(self.stalk_radius, defaults.stalk_radius, &STALK_RADIUS_RANGE),
            ridge_size: real(self.ridge_size, defaults.ridge_size, &RIDGE_SIZE_RANGE),
            waist_size: real(self.waist_size, defaults.waist_size, &WAIST_SIZE_RANGE),
            height: real(self.height, defaults.height, &SEGMENT_HEIGHT_RANGE),
            tilt: real(self.tilt, defaults.tilt, &TILT_RANGE),
        }
    }

    /// Number of vertices a stalk with these parameters has.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn vertex_count(&self) -> usize {
        self.lattice_count(STATIONS_PER_SEGMENT)
    }

    /// Number of quad faces a stalk with these parameters has.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    pub fn face_count(&self) -> usize {
        self.lattice_count(QUADS_PER_STRIP)
    }

    fn lattice_count(&self, per_strip: usize) -> usize {
        (self.segments as usize)
            .checked_mul(self.resolution as usize)
            .and_then(|strips| strips.checked_mul(per_strip))
            .unwrap_or(usize::MAX)
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            name,
            format!("must be finite and positive: {}", value),
        ))
    }
}
