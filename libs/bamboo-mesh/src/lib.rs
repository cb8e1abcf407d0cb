//! # Bamboo Mesh
//!
//! Procedural quad meshes of bamboo stalks.
//!
//! ## Architecture
//!
//! ```text
//! StalkParameters → StalkMeshBuilder (+ RandomSource) → Mesh → ops::subdivide
//! ```
//!
//! A stalk is a stack of segments. Each segment is a ring of radial strips
//! with eleven stations from base to ridge, so every segment carries a
//! pinched waist and a ridge at its node. Segments lean a little further
//! than the one below and are jittered through a [`random::RandomSource`],
//! which makes a seeded stalk reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use bamboo_mesh::{generate_stalk, GenerateOptions, StalkParameters};
//!
//! let params = StalkParameters::default();
//! let options = GenerateOptions {
//!     seed: Some(42),
//!     subdivision: None,
//!     ..Default::default()
//! };
//! let mesh = generate_stalk(&params, &options)?;
//! assert_eq!(mesh.vertex_count(), params.vertex_count());
//! # Ok::<(), bamboo_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod random;
pub mod stalk;

pub use config::GeneratorConfig;
pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{subdivide, SubdivideParams};
pub use params::StalkParameters;
pub use stalk::StalkMeshBuilder;

use random::SeededRandom;
use serde::{Deserialize, Serialize};
use tracing::info;

/// How [`generate_stalk`] draws and post-processes a stalk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Seed for the random stream; `None` seeds from the operating system
    pub seed: Option<u64>,
    /// Jitter bands and vertex limit
    pub config: GeneratorConfig,
    /// Subdivision applied after building; `None` keeps the raw stalk
    pub subdivision: Option<SubdivideParams>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            config: GeneratorConfig::default(),
            subdivision: Some(SubdivideParams::default()),
        }
    }
}

impl GenerateOptions {
    /// Reproducible options without subdivision.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            subdivision: None,
            ..Self::default()
        }
    }
}

/// Generates a bamboo stalk mesh.
///
/// This is the main entry point: validates `params`, builds the stalk from
/// a seeded stream and applies the requested subdivision.
///
/// # Errors
///
/// Any [`MeshError`] raised by validation, the vertex limit, or
/// subdivision. Nothing is returned on failure.
pub fn generate_stalk(
    params: &StalkParameters,
    options: &GenerateOptions,
) -> Result<Mesh, MeshError> {
    let builder = StalkMeshBuilder::with_config(*params, options.config)?;

    let mut rng = match options.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    let mesh = builder.build(&mut rng);

    let mesh = match &options.subdivision {
        Some(subdivision) => subdivide(&mesh, subdivision)?,
        None => mesh,
    };

    info!(
        seed = ?options.seed,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Generated bamboo stalk"
    );

    Ok(mesh)
}
