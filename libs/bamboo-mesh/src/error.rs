//! # Mesh Errors
//!
//! Error types for stalk generation and mesh operations.

use config::ConfigError;
use thiserror::Error;

/// Errors that can occur during stalk generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A stalk parameter is outside its valid domain
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Generator configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many faces
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces { count: usize, max: usize },

    /// Operation needs at least one face
    #[error("Mesh has no faces")]
    EmptyMesh,

    /// Subdivision settings rejected
    #[error("Invalid subdivision: {message}")]
    InvalidSubdivision { message: String },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates an invalid subdivision error.
    pub fn invalid_subdivision(message: impl Into<String>) -> Self {
        Self::InvalidSubdivision {
            message: message.into(),
        }
    }
}
