#![warn(missing_docs)]

//! Math types for the raysphere kernel.
//!
//! A thin wrapper around nalgebra providing the [`Vector`] value type used by
//! rays and spheres, the shared scalar helpers [`square`] and [`normalize`],
//! and tolerance constants for comparing results of different algorithms.

use nalgebra::Vector3;

mod error;
mod vector;

pub use error::{MathError, Result};
pub use vector::Vector;

/// Raw nalgebra storage behind [`Vector`].
pub type Vec3 = Vector3<f64>;

/// Square of a scalar.
#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Normalize `v` to unit length.
///
/// A vector of length exactly zero is returned unchanged. Callers that need
/// to reject degenerate input should use [`Vector::try_normalize`].
#[inline]
pub fn normalize(v: Vector) -> Vector {
    v.normalize()
}

/// Tolerance constants for numeric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Absolute tolerance, used near zero where a relative test breaks down.
    pub linear: f64,
    /// Relative tolerance, scaled by the larger magnitude of the two operands.
    pub relative: f64,
}

impl Tolerance {
    /// Default tolerances (1e-12 absolute, 1e-9 relative).
    pub const DEFAULT: Self = Self {
        linear: 1e-12,
        relative: 1e-9,
    };

    /// Check if a scalar is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two scalars are equal within tolerance.
    pub fn scalars_equal(&self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        diff <= self.linear || diff <= self.relative * a.abs().max(b.abs())
    }

    /// Check if two vectors are equal within tolerance.
    ///
    /// The relative bound is taken against the larger of the two norms, so
    /// components close to zero don't fail a comparison that is accurate
    /// for the vector as a whole.
    pub fn vectors_equal(&self, a: &Vector, b: &Vector) -> bool {
        let diff = a.sub(*b).length();
        diff <= self.linear || diff <= self.relative * a.length().max(b.length())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        assert_eq!(square(3.0), 9.0);
        assert_eq!(square(-1.5), 2.25);
        assert_eq!(square(0.0), 0.0);
    }

    #[test]
    fn test_normalize_free_fn() {
        let n = normalize(Vector::new(0.0, 3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.y() - 0.6).abs() < 1e-12);
        assert_eq!(normalize(Vector::zero()), Vector::zero());
    }

    #[test]
    fn test_tolerance_scalars() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.scalars_equal(1.0e6, 1.0e6 + 1e-4));
        assert!(!tol.scalars_equal(1.0, 1.0 + 1e-6));
        assert!(tol.scalars_equal(0.0, 1e-13));
        assert!(tol.is_zero(-1e-13));
        assert!(!tol.is_zero(1e-9));
    }

    #[test]
    fn test_tolerance_vectors() {
        let tol = Tolerance::DEFAULT;
        let a = Vector::new(100.0, 1e-14, -50.0);
        let b = Vector::new(100.0 + 1e-8, 0.0, -50.0);
        assert!(tol.vectors_equal(&a, &b));
        let c = Vector::new(100.001, 0.0, -50.0);
        assert!(!tol.vectors_equal(&a, &c));
    }
}
