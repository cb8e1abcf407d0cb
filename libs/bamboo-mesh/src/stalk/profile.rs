//! Longitudinal profile of one segment.
//!
//! A segment is a stack of eleven rings. From the bottom: two full-width
//! rings, a waist that pinches in and out again, a straight cap, a bulging
//! node ridge, and a closing full-width ring.

use config::constants::{RIDGE_HEIGHT_FRACTION, STATIONS_PER_SEGMENT, STATION_HEIGHT_UNITS};

/// How a ring's radius relates to the segment's base radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingScale {
    /// Full stalk width
    Base,
    /// Scaled by the waist multiplier
    Waist,
    /// Scaled by the waist multiplier squared (narrowest point)
    Pinch,
    /// Scaled by the ridge multiplier
    Ridge,
}

impl RingScale {
    /// Radial multiplier for this ring.
    #[inline]
    pub fn factor(self, waist: f64, ridge: f64) -> f64 {
        match self {
            RingScale::Base => 1.0,
            RingScale::Waist => waist,
            RingScale::Pinch => waist * waist,
            RingScale::Ridge => ridge,
        }
    }
}

/// One ring position within a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Height in units of `height * RIDGE_HEIGHT_FRACTION`
    pub height_units: f64,
    /// Radial scale of the ring
    pub scale: RingScale,
}

impl Station {
    /// Height of this station above the segment base.
    #[inline]
    pub fn height(&self, segment_height: f64) -> f64 {
        segment_height * RIDGE_HEIGHT_FRACTION * self.height_units
    }
}

const SCALES: [RingScale; STATIONS_PER_SEGMENT] = [
    RingScale::Base,
    RingScale::Base,
    RingScale::Waist,
    RingScale::Pinch,
    RingScale::Pinch,
    RingScale::Waist,
    RingScale::Base,
    RingScale::Base,
    RingScale::Ridge,
    RingScale::Ridge,
    RingScale::Base,
];

/// The eleven stations of a segment, bottom to top.
pub fn stations() -> [Station; STATIONS_PER_SEGMENT] {
    std::array::from_fn(|s| Station {
        height_units: STATION_HEIGHT_UNITS[s],
        scale: SCALES[s],
    })
}
