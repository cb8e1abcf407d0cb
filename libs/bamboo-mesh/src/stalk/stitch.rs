//! Quad topology of one segment.
//!
//! Vertices of a segment are laid out as radial strips: strip `i` holds
//! the eleven stations of radial step `i`, bottom to top. Quads connect
//! station `s` and `s + 1` of neighbouring strips.

use crate::mesh::Mesh;
use config::constants::{QUADS_PER_STRIP, STATIONS_PER_SEGMENT};

/// Appends the quads of one segment whose first vertex is `base`.
///
/// The seam strip (last radial step back to the first) lists its corners
/// starting from the last strip, which keeps the winding of the seam in
/// line with the rest of the tube.
pub fn stitch_segment(mesh: &mut Mesh, base: u32, resolution: u32) {
    let stride = STATIONS_PER_SEGMENT as u32;
    let last = (resolution - 1) * stride;

    for strip in 0..resolution - 1 {
        let here = strip * stride;
        let next = (strip + 1) * stride;
        for s in 0..QUADS_PER_STRIP as u32 {
            mesh.add_quad([
                base + here + s,
                base + next + s,
                base + next + s + 1,
                base + here + s + 1,
            ]);
        }
    }

    for s in 0..QUADS_PER_STRIP as u32 {
        mesh.add_quad([
            base + last + s,
            base + s,
            base + s + 1,
            base + last + s + 1,
        ]);
    }
}
