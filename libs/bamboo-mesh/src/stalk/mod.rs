//! # Stalk Builder
//!
//! Generates the quad mesh of a bamboo stalk.
//!
//! ## Algorithm
//!
//! For every segment, bottom to top:
//!
//! 1. Draw the segment's shape (waist, ridge, radius multipliers), its
//!    boundary offset and its lean increment from the random source
//! 2. Emit one strip of eleven stations per radial step, placed through the
//!    segment's pose (accumulated lean about Y, anchored at the segment base)
//! 3. Stitch the strips into quads, closing the seam
//! 4. Continue the next segment from the placed axis point just below the
//!    ridge, so the lean accumulates along the stalk
//!
//! Random draws happen in a fixed order per segment: boundary offset,
//! waist, ridge, radius, lean, Y scale, Z scale. A seeded source therefore
//! reproduces a stalk bit for bit.

mod frame;
mod profile;
mod stitch;

#[cfg(test)]
mod tests;

pub use frame::{SegmentFrame, SegmentPose};
pub use profile::{stations, RingScale, Station};
pub use stitch::stitch_segment;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::StalkParameters;
use crate::random::RandomSource;
use config::constants::{NODE_TOP_FRACTION, RIDGE_HEIGHT_FRACTION};
use config::GeneratorConfig;
use glam::DVec3;
use tracing::{debug, trace};

/// Per-segment draws of the shape multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SegmentShape {
    waist: f64,
    ridge: f64,
    radius: f64,
}

/// Builds bamboo stalk meshes from validated parameters.
///
/// # Example
///
/// ```rust
/// use bamboo_mesh::{StalkMeshBuilder, StalkParameters};
/// use bamboo_mesh::random::SeededRandom;
///
/// let params = StalkParameters { segments: 2, resolution: 8, ..Default::default() };
/// let builder = StalkMeshBuilder::new(params)?;
/// let mesh = builder.build(&mut SeededRandom::new(1));
///
/// assert_eq!(mesh.vertex_count(), 2 * 8 * 11);
/// assert_eq!(mesh.face_count(), 2 * 8 * 10);
/// # Ok::<(), bamboo_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StalkMeshBuilder {
    params: StalkParameters,
    config: GeneratorConfig,
}

impl StalkMeshBuilder {
    /// Creates a builder with the default jitter bands.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidParameter`] when a parameter breaks an invariant
    /// - [`MeshError::TooManyVertices`] when the stalk would exceed the limit
    pub fn new(params: StalkParameters) -> Result<Self, MeshError> {
        Self::with_config(params, GeneratorConfig::default())
    }

    /// Creates a builder with custom jitter bands and limits.
    ///
    /// # Errors
    ///
    /// - [`MeshError::Config`] when `config` fails its own validation
    /// - [`MeshError::InvalidParameter`] when a parameter breaks an invariant
    /// - [`MeshError::TooManyVertices`] when the stalk would exceed
    ///   `config.max_vertices`
    pub fn with_config(
        params: StalkParameters,
        config: GeneratorConfig,
    ) -> Result<Self, MeshError> {
        config.validate()?;
        params.validate()?;

        let count = params.vertex_count();
        let max = config.max_vertices.min(u32::MAX as usize);
        if count > max {
            return Err(MeshError::TooManyVertices { count, max });
        }

        Ok(Self { params, config })
    }

    /// The parameters this builder was created with.
    pub fn params(&self) -> &StalkParameters {
        &self.params
    }

    /// The jitter bands this builder draws with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the stalk mesh.
    pub fn build<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Mesh {
        self.build_with_frames(rng).0
    }

    /// Builds the stalk mesh and reports the frame each segment was placed
    /// with, bottom to top.
    pub fn build_with_frames<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (Mesh, Vec<SegmentFrame>) {
        let params = &self.params;
        debug!(
            segments = params.segments,
            resolution = params.resolution,
            radius = params.stalk_radius,
            height = params.height,
            tilt = params.tilt,
            "Building bamboo stalk"
        );

        let mut mesh = Mesh::with_capacity(params.vertex_count(), params.face_count());
        let mut frames = Vec::with_capacity(params.segments as usize);
        let mut frame = SegmentFrame::ground();

        for index in 0..params.segments {
            frames.push(frame);
            frame = self.build_segment(index, frame, rng, &mut mesh);
        }

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "Bamboo stalk built"
        );

        (mesh, frames)
    }

    /// Appends one segment and returns the frame the next one starts from.
    fn build_segment<R: RandomSource + ?Sized>(
        &self,
        index: u32,
        frame: SegmentFrame,
        rng: &mut R,
        mesh: &mut Mesh,
    ) -> SegmentFrame {
        let params = &self.params;
        let config = &self.config;

        let boundary_band = RIDGE_HEIGHT_FRACTION * config.boundary_jitter;
        let boundary = rng.uniform(-boundary_band, boundary_band);

        let shape = SegmentShape {
            waist: params.waist_size * rng.jitter(config.shape_jitter),
            ridge: params.ridge_size * rng.jitter(config.shape_jitter),
            radius: params.stalk_radius * rng.jitter(config.shape_jitter),
        };

        let lean = params.tilt * rng.jitter(config.tilt_jitter);
        let axis_scale = (rng.jitter(config.axis_jitter), rng.jitter(config.axis_jitter));
        let pose = frame.lean(lean, axis_scale);

        trace!(
            segment = index,
            origin = ?frame.origin,
            tilt = pose.tilt_degrees(),
            waist = shape.waist,
            ridge = shape.ridge,
            radius = shape.radius,
            "Placing segment"
        );

        let base = mesh.vertex_count() as u32;
        emit_strips(mesh, &pose, &shape, params.resolution, params.height);
        stitch_segment(mesh, base, params.resolution);

        pose.next_frame(params.height * (NODE_TOP_FRACTION - boundary))
    }
}

/// Emits `resolution` strips of eleven stations each.
fn emit_strips(
    mesh: &mut Mesh,
    pose: &SegmentPose,
    shape: &SegmentShape,
    resolution: u32,
    height: f64,
) {
    let stations = stations();
    let step_degrees = 360.0 / resolution as f64;

    for step in 0..resolution {
        let (sin, cos) = (step_degrees * step as f64).to_radians().sin_cos();
        let x = shape.radius * cos;
        let y = shape.radius * sin;

        for station in &stations {
            let factor = station.scale.factor(shape.waist, shape.ridge);
            let local = DVec3::new(x * factor, y * factor, station.height(height));
            mesh.add_vertex(pose.place(local));
        }
    }
}
