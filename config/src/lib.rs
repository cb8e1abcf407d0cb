//! # Config Crate
//!
//! Centralized configuration constants for the bamboo stalk generator.
//! Every magic number of the stalk profile, the jitter bands, and the
//! parameter ranges the host exposes is defined here so the mesh crate
//! stays declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{RIDGE_HEIGHT_FRACTION, RESOLUTION_RANGE, DEFAULT_RESOLUTION};
//!
//! // The node band occupies one eighth of every segment
//! assert_eq!(RIDGE_HEIGHT_FRACTION, 0.125);
//!
//! // Defaults always sit inside the host range
//! assert!(RESOLUTION_RANGE.contains(&DEFAULT_RESOLUTION));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults and ranges match the add-on's properties
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod generator;

pub use generator::{ConfigError, GeneratorConfig};
