//! # Quad Subdivision
//!
//! Splits every quad into four by cutting each edge once and filling the
//! face with a centre vertex. With a non-zero smoothness the new vertices
//! are pulled toward the surface implied by the vertex normals, which
//! rounds off the faceted rings of a stalk.
//!
//! ## Algorithm
//!
//! 1. Compute area-weighted vertex normals of the input
//! 2. For each edge, create one shared midpoint vertex
//! 3. For each face, create a centre vertex
//! 4. Blend each new vertex from its linear position toward the average of
//!    its projections onto the corner vertices' tangent planes
//! 5. Emit four quads per input quad, preserving winding


use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{
    DEFAULT_SUBDIVISION_ITERATIONS, DEFAULT_SUBDIVISION_SMOOTHNESS, MAX_FACES,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Parameters for quad subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubdivideParams {
    /// Number of subdivision passes
    pub iterations: u32,
    /// Blend between flat midpoints (0.0) and fully rounded ones (1.0)
    pub smoothness: f64,
    /// Maximum faces allowed in the result
    pub max_faces: usize,
}

impl Default for SubdivideParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_SUBDIVISION_ITERATIONS,
            smoothness: DEFAULT_SUBDIVISION_SMOOTHNESS,
            max_faces: MAX_FACES,
        }
    }
}

impl SubdivideParams {
    /// Midpoint subdivision that keeps the surface unchanged.
    pub fn flat() -> Self {
        Self {
            smoothness: 0.0,
            ..Self::default()
        }
    }

    /// Sets the number of passes.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the smoothness.
    pub fn with_smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = smoothness;
        self
    }

    /// Sets the face limit.
    pub fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Face count after all passes, saturating on overflow.
    pub fn expected_faces(&self, current_faces: usize) -> usize {
        let mut faces = current_faces;
        for _ in 0..self.iterations {
            if faces == 0 || faces == usize::MAX {
                break;
            }
            faces = faces.saturating_mul(4);
        }
        faces
    }
}

/// Subdivides a quad mesh.
///
/// # Errors
///
/// - [`MeshError::EmptyMesh`] if the mesh has no faces
/// - [`MeshError::InvalidSubdivision`] for zero iterations or a smoothness
///   outside `[0, 1]`
/// - [`MeshError::TooManyFaces`] if the result would exceed `max_faces`
///
/// # Example
///
/// ```rust
/// use bamboo_mesh::Mesh;
/// use bamboo_mesh::ops::{subdivide, SubdivideParams};
/// use glam::DVec3;
///
/// let mut quad = Mesh::new();
/// quad.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// quad.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// quad.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// quad.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// quad.add_quad([0, 1, 2, 3]);
///
/// let fine = subdivide(&quad, &SubdivideParams::flat())?;
/// assert_eq!(fine.vertex_count(), 9);
/// assert_eq!(fine.face_count(), 4);
/// # Ok::<(), bamboo_mesh::MeshError>(())
/// ```
pub fn subdivide(mesh: &Mesh, params: &SubdivideParams) -> Result<Mesh, MeshError> {
    if mesh.face_count() == 0 {
        return Err(MeshError::EmptyMesh);
    }
    if params.iterations == 0 {
        return Err(MeshError::invalid_subdivision("at least one iteration is required"));
    }
    if !(0.0..=1.0).contains(&params.smoothness) {
        return Err(MeshError::invalid_subdivision(format!(
            "smoothness must be in [0, 1]: {}",
            params.smoothness
        )));
    }

    let projected = params.expected_faces(mesh.face_count());
    if projected > params.max_faces {
        return Err(MeshError::TooManyFaces {
            count: projected,
            max: params.max_faces,
        });
    }

    debug!(
        faces = mesh.face_count(),
        vertices = mesh.vertex_count(),
        iterations = params.iterations,
        smoothness = params.smoothness,
        "Subdividing mesh"
    );

    let mut current = mesh.clone();
    for i in 0..params.iterations {
        current = subdivide_once(&current, params.smoothness);
        debug!(
            iteration = i + 1,
            faces = current.face_count(),
            vertices = current.vertex_count(),
            "Subdivision pass complete"
        );
    }

    Ok(current)
}

/// One pass of edge cutting and grid fill.
fn subdivide_once(mesh: &Mesh, smoothness: f64) -> Mesh {
    let mut with_normals = mesh.clone();
    with_normals.compute_normals();
    let normals = with_normals.normals().unwrap_or_default();

    let mut refined = Mesh::with_capacity(
        mesh.vertex_count() * 2 + mesh.face_count(),
        mesh.face_count() * 4,
    );
    for &v in mesh.vertices() {
        refined.add_vertex(v);
    }

    let mut edge_midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    let surface = Surface {
        vertices: mesh.vertices(),
        normals,
        smoothness,
    };

    for &[v0, v1, v2, v3] in mesh.faces() {
        let m01 = get_or_create_midpoint(v0, v1, &surface, &mut refined, &mut edge_midpoints);
        let m12 = get_or_create_midpoint(v1, v2, &surface, &mut refined, &mut edge_midpoints);
        let m23 = get_or_create_midpoint(v2, v3, &surface, &mut refined, &mut edge_midpoints);
        let m30 = get_or_create_midpoint(v3, v0, &surface, &mut refined, &mut edge_midpoints);
        let centre = refined.add_vertex(surface.blend(&[v0, v1, v2, v3]));

        refined.add_quad([v0, m01, centre, m30]);
        refined.add_quad([m01, v1, m12, centre]);
        refined.add_quad([centre, m12, v2, m23]);
        refined.add_quad([m30, centre, m23, v3]);
    }

    refined
}

/// Positions and normals of the mesh being refined.
struct Surface<'a> {
    vertices: &'a [DVec3],
    normals: &'a [DVec3],
    smoothness: f64,
}

impl Surface<'_> {
    /// Position of a new vertex spanned by `corners`.
    fn blend(&self, corners: &[u32]) -> DVec3 {
        let count = corners.len() as f64;
        let linear = corners
            .iter()
            .map(|&c| self.vertices[c as usize])
            .sum::<DVec3>()
            / count;

        if self.smoothness == 0.0 || self.normals.is_empty() {
            return linear;
        }

        let projected = corners
            .iter()
            .map(|&c| {
                let corner = self.vertices[c as usize];
                let normal = self.normals[c as usize];
                linear - normal * (linear - corner).dot(normal)
            })
            .sum::<DVec3>()
            / count;

        linear.lerp(projected, self.smoothness)
    }
}

/// Get or create the shared vertex cutting edge `(v0, v1)`.
fn get_or_create_midpoint(
    v0: u32,
    v1: u32,
    surface: &Surface<'_>,
    refined: &mut Mesh,
    edge_midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let edge = normalize_edge(v0, v1);

    if let Some(&midpoint) = edge_midpoints.get(&edge) {
        return midpoint;
    }

    let midpoint = refined.add_vertex(surface.blend(&[edge.0, edge.1]));
    edge_midpoints.insert(edge, midpoint);
    midpoint
}

/// Normalize edge so smaller vertex index comes first.
const fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 <= v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}
