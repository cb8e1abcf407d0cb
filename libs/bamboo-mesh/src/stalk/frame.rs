//! Cumulative placement of segments along a leaning stalk.

use glam::{DMat3, DVec3};

/// Where a segment starts and how far the stalk has leaned so far.
///
/// Each segment turns its frame into a [`SegmentPose`] and hands the
/// frame for the next segment back to the builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFrame {
    /// Base point of the segment's axis
    pub origin: DVec3,
    /// Accumulated lean about the Y axis, in degrees
    pub tilt_degrees: f64,
}

impl SegmentFrame {
    /// Frame of the first segment: at the origin, upright.
    pub fn ground() -> Self {
        Self {
            origin: DVec3::ZERO,
            tilt_degrees: 0.0,
        }
    }

    /// Adds this segment's lean and fixes its post-rotation axis scale.
    ///
    /// `axis_scale` multiplies the rotated Y and Z components.
    pub fn lean(&self, delta_degrees: f64, axis_scale: (f64, f64)) -> SegmentPose {
        let tilt_degrees = self.tilt_degrees + delta_degrees;
        SegmentPose {
            origin: self.origin,
            tilt_degrees,
            rotation: DMat3::from_rotation_y(tilt_degrees.to_radians()),
            axis_scale: DVec3::new(1.0, axis_scale.0, axis_scale.1),
        }
    }
}

impl Default for SegmentFrame {
    fn default() -> Self {
        Self::ground()
    }
}

/// Rigid placement (plus a slight axis scale) of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPose {
    origin: DVec3,
    tilt_degrees: f64,
    rotation: DMat3,
    axis_scale: DVec3,
}

impl SegmentPose {
    /// Maps a point from segment-local space into stalk space.
    #[inline]
    pub fn place(&self, local: DVec3) -> DVec3 {
        self.origin + (self.rotation * local) * self.axis_scale
    }

    /// Frame of the segment that continues from local height `height`.
    pub fn next_frame(&self, height: f64) -> SegmentFrame {
        SegmentFrame {
            origin: self.place(DVec3::new(0.0, 0.0, height)),
            tilt_degrees: self.tilt_degrees,
        }
    }

    /// Accumulated lean of this segment, in degrees.
    pub fn tilt_degrees(&self) -> f64 {
        self.tilt_degrees
    }
}
