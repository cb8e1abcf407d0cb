//! # Mesh Operations
//!
//! Operations applied to a generated stalk, currently quad subdivision.

pub mod subdivide;

pub use subdivide::{subdivide, SubdivideParams};
