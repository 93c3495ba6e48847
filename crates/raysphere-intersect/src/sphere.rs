//! Sphere primitive with precomputed radius terms.

use log::debug;
use raysphere_math::{square, Vector};
use serde::{Deserialize, Serialize};

use crate::{GeometryError, Result};

/// Sphere defined by center and radius.
///
/// `inverse_radius` and `squared_radius` are computed once in [`Sphere::new`]
/// and reused by every query, so fields are private to keep them in sync.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSphere", into = "RawSphere")]
pub struct Sphere {
    center: Vector,
    radius: f64,
    inverse_radius: f64,
    squared_radius: f64,
}

impl Sphere {
    /// Create a sphere.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] unless `radius > 0` and
    /// both `1 / radius` and `radius^2` are finite.
    pub fn new(center: Vector, radius: f64) -> Result<Self> {
        let inverse_radius = 1.0 / radius;
        let squared_radius = square(radius);
        if !(radius > 0.0) || !inverse_radius.is_finite() || !squared_radius.is_finite() {
            debug!("rejecting sphere at {center:?}: radius {radius}");
            return Err(GeometryError::InvalidGeometry { radius });
        }
        Ok(Self {
            center,
            radius,
            inverse_radius,
            squared_radius,
        })
    }

    /// Center of the sphere.
    #[inline]
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `1 / radius`.
    #[inline]
    pub fn inverse_radius(&self) -> f64 {
        self.inverse_radius
    }

    /// `radius^2`.
    #[inline]
    pub fn squared_radius(&self) -> f64 {
        self.squared_radius
    }

    /// Outward unit normal at a point on the surface.
    ///
    /// Computed as `(surface_point - center) * inverse_radius`. The point is
    /// not checked; off-surface input gives a non-unit vector.
    #[inline]
    pub fn unit_normal_at(&self, surface_point: Vector) -> Vector {
        surface_point.sub(self.center).scale(self.inverse_radius)
    }

    /// Whether `point` lies strictly inside the sphere.
    #[inline]
    pub fn contains(&self, point: Vector) -> bool {
        point.squared_distance(self.center) < self.squared_radius
    }
}

#[derive(Serialize, Deserialize)]
struct RawSphere {
    center: Vector,
    radius: f64,
}

impl TryFrom<RawSphere> for Sphere {
    type Error = GeometryError;

    fn try_from(raw: RawSphere) -> Result<Self> {
        Sphere::new(raw.center, raw.radius)
    }
}

impl From<Sphere> for RawSphere {
    fn from(s: Sphere) -> Self {
        Self {
            center: s.center,
            radius: s.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_fields() {
        let s = Sphere::new(Vector::new(3.0, 0.0, 5.0), 4.0).unwrap();
        assert_eq!(s.radius(), 4.0);
        assert_eq!(s.inverse_radius(), 0.25);
        assert_eq!(s.squared_radius(), 16.0);
        assert_eq!(s.center(), Vector::new(3.0, 0.0, 5.0));
    }

    #[test]
    fn test_invalid_radius() {
        for r in [0.0, -0.0, -1.0, f64::NAN] {
            let err = Sphere::new(Vector::zero(), r).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
        }
    }

    #[test]
    fn test_radius_out_of_range() {
        for r in [f64::INFINITY, 1e200, f64::MAX, f64::from_bits(1)] {
            let err = Sphere::new(Vector::zero(), r).unwrap_err();
            assert_eq!(err, GeometryError::InvalidGeometry { radius: r });
        }
        // Large and small radii that stay in range.
        let s = Sphere::new(Vector::zero(), 1e150).unwrap();
        assert!(s.squared_radius().is_finite());
        let s = Sphere::new(Vector::zero(), 1e-150).unwrap();
        assert!(s.inverse_radius().is_finite());
    }

    #[test]
    fn test_unit_normal_on_surface() {
        let s = Sphere::new(Vector::new(1.0, -2.0, 0.5), 2.5).unwrap();
        let dirs = [
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, -1.0, 0.0),
            Vector::new(1.0, 2.0, -3.0).normalize(),
        ];
        for d in dirs {
            let p = s.center().add(d.scale(s.radius()));
            let n = s.unit_normal_at(p);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
            assert!(n.dot(p.sub(s.center())) > 0.0);
        }
    }

    #[test]
    fn test_unit_normal_off_surface_not_unit() {
        let s = Sphere::new(Vector::zero(), 2.0).unwrap();
        let n = s.unit_normal_at(Vector::new(4.0, 0.0, 0.0));
        assert_eq!(n, Vector::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_contains() {
        let s = Sphere::new(Vector::zero(), 1.0).unwrap();
        assert!(s.contains(Vector::new(0.5, 0.0, 0.0)));
        assert!(!s.contains(Vector::new(1.0, 0.0, 0.0)));
        assert!(!s.contains(Vector::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_serde_validates() {
        let s: Sphere = serde_json::from_str(r#"{"center": [0, 1, 2], "radius": 2}"#).unwrap();
        assert_eq!(s.squared_radius(), 4.0);
        assert_eq!(s.inverse_radius(), 0.5);

        let bad: std::result::Result<Sphere, _> =
            serde_json::from_str(r#"{"center": [0, 1, 2], "radius": -2}"#);
        assert!(bad.is_err());

        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"center":[0.0,1.0,2.0],"radius":2.0}"#);
    }
}
