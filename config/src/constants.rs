//! # Configuration Constants
//!
//! Centralized constants for the stalk generator. Profile geometry, jitter
//! magnitudes, host parameter ranges and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Profile**: Station layout of one bamboo segment
//! - **Jitter**: Default randomization bands
//! - **Parameters**: Host defaults and declared ranges
//! - **Limits**: Maximum values for safety bounds

use std::ops::RangeInclusive;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum face area below which a quad is considered degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Fraction of a segment's height devoted to one profile unit.
///
/// Station heights are expressed as multiples of `height * RIDGE_HEIGHT_FRACTION`;
/// the topmost station sits at eight units, i.e. the full segment height.
///
/// # Example
///
/// ```rust
/// use config::constants::RIDGE_HEIGHT_FRACTION;
///
/// let height = 5.0;
/// let top = height * RIDGE_HEIGHT_FRACTION * 8.0;
/// assert_eq!(top, height);
/// ```
pub const RIDGE_HEIGHT_FRACTION: f64 = 1.0 / 8.0;

/// Number of rings (stations) stacked in one segment.
pub const STATIONS_PER_SEGMENT: usize = 11;

/// Number of quads per radial strip of one segment.
pub const QUADS_PER_STRIP: usize = STATIONS_PER_SEGMENT - 1;

/// Station heights in units of `height * RIDGE_HEIGHT_FRACTION`.
///
/// # Example
///
/// ```rust
/// use config::constants::{STATION_HEIGHT_UNITS, STATIONS_PER_SEGMENT};
///
/// assert_eq!(STATION_HEIGHT_UNITS.len(), STATIONS_PER_SEGMENT);
/// assert!(STATION_HEIGHT_UNITS.windows(2).all(|w| w[0] < w[1]));
/// ```
pub const STATION_HEIGHT_UNITS: [f64; STATIONS_PER_SEGMENT] =
    [0.0, 0.25, 1.0, 2.0, 3.0, 4.0, 7.0, 7.55, 7.70, 7.85, 8.0];

/// Where the next segment starts, as a fraction of the segment height.
///
/// Consecutive segments overlap by half a profile unit so the node band of
/// one segment flows into the base of the next.
///
/// # Example
///
/// ```rust
/// use config::constants::NODE_TOP_FRACTION;
///
/// assert_eq!(NODE_TOP_FRACTION, 0.9375);
/// ```
pub const NODE_TOP_FRACTION: f64 = 1.0 - RIDGE_HEIGHT_FRACTION / 2.0;

// =============================================================================
// JITTER CONSTANTS
// =============================================================================

/// Relative band for the per-segment waist, ridge and radius multipliers.
///
/// Each multiplier is drawn from `nominal * [1 - SHAPE_JITTER, 1 + SHAPE_JITTER]`.
pub const SHAPE_JITTER: f64 = 0.02;

/// Segment boundary jitter, as a fraction of [`RIDGE_HEIGHT_FRACTION`].
///
/// The advance to the next segment moves by up to
/// `height * RIDGE_HEIGHT_FRACTION * BOUNDARY_JITTER` either way.
pub const BOUNDARY_JITTER: f64 = 1.0 / 20.0;

/// Relative band for the per-segment tilt increment.
pub const TILT_JITTER: f64 = 0.01;

/// Relative band for the per-segment Y and Z axis scale after rotation.
pub const AXIS_JITTER: f64 = 0.01;

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// Default number of segments in a stalk.
pub const DEFAULT_SEGMENTS: u32 = 5;

/// Default number of radial steps per ring.
pub const DEFAULT_RESOLUTION: u32 = 32;

/// Default stalk radius.
pub const DEFAULT_STALK_RADIUS: f64 = 1.0;

/// Default ridge (node bulge) multiplier.
pub const DEFAULT_RIDGE_SIZE: f64 = 1.03;

/// Default waist (pinch) multiplier.
pub const DEFAULT_WAIST_SIZE: f64 = 0.95;

/// Default height of one segment.
pub const DEFAULT_SEGMENT_HEIGHT: f64 = 5.0;

/// Default tilt increment per segment, in degrees.
pub const DEFAULT_TILT_DEGREES: f64 = 1.0;

// =============================================================================
// PARAMETER RANGES (host property declarations)
// =============================================================================

/// Smallest radial resolution that still forms a closed ring.
pub const MIN_RESOLUTION: u32 = 3;

/// Host range for the segment count.
pub const SEGMENTS_RANGE: RangeInclusive<u32> = 1..=50;

/// Host range for the radial resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_RESOLUTION, RESOLUTION_RANGE};
///
/// assert!(*RESOLUTION_RANGE.start() >= MIN_RESOLUTION);
/// ```
pub const RESOLUTION_RANGE: RangeInclusive<u32> = 16..=64;

/// Host range for the stalk radius.
pub const STALK_RADIUS_RANGE: RangeInclusive<f64> = 0.2..=4.0;

/// Host range for the ridge multiplier.
pub const RIDGE_SIZE_RANGE: RangeInclusive<f64> = 1.01..=1.1;

/// Host range for the waist multiplier.
pub const WAIST_SIZE_RANGE: RangeInclusive<f64> = 0.8..=0.99;

/// Host range for the segment height.
pub const SEGMENT_HEIGHT_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// Host range for the tilt increment, in degrees.
pub const TILT_RANGE: RangeInclusive<f64> = 0.0..=3.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 50 * 64 * 11;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of faces a subdivision pass may produce.
pub const MAX_FACES: usize = 10_000_000;

/// Default number of subdivision iterations applied after generation.
pub const DEFAULT_SUBDIVISION_ITERATIONS: u32 = 1;

/// Default subdivision smoothness (`0.0` = flat midpoints, `1.0` = fully rounded).
pub const DEFAULT_SUBDIVISION_SMOOTHNESS: f64 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a value into an inclusive range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_to, TILT_RANGE};
///
/// assert_eq!(clamp_to(7.5, &TILT_RANGE), 3.0);
/// assert_eq!(clamp_to(-1.0, &TILT_RANGE), 0.0);
/// ```
#[inline]
pub fn clamp_to<T: PartialOrd + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    }
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
