//! Error types for ray and sphere construction.

use raysphere_math::MathError;
use thiserror::Error;

/// Errors raised when building geometry from invalid input.
///
/// A ray that misses a sphere is not an error; intersection queries
/// return `None` for that case.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Sphere radius is zero, negative, not a number, or so large or small
    /// that its square or reciprocal is not finite.
    #[error("invalid sphere radius {radius}: must be finite and > 0")]
    InvalidGeometry {
        /// The rejected radius.
        radius: f64,
    },

    /// Ray direction has zero, infinite or NaN length and cannot be
    /// normalized.
    #[error("ray direction cannot be normalized: length is zero, infinite or NaN")]
    DegenerateDirection,

    /// Vector arithmetic failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for geometry construction.
pub type Result<T> = std::result::Result<T, GeometryError>;
