//! Immutable 3D vector value type.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{MathError, Result, Tolerance, Vec3};

/// A 3-component `f64` vector.
///
/// Every operation returns a new value; operands are never mutated. The
/// named methods are the primary API and the `+`, `-` and `*` operators
/// forward to them. There is no `/` operator because division by zero has
/// to be reported, see [`Vector::divide`]. The named `add`, `sub` and `neg`
/// shadow the trait methods on purpose so call sites read the same with or
/// without the operators in scope.
///
/// Serializes as a `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector(Vec3);

#[allow(clippy::should_implement_trait)]
impl Vector {
    /// Create a vector from its components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self(Vec3::zeros())
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Borrow the underlying nalgebra vector.
    #[inline]
    pub fn as_vec3(&self) -> &Vec3 {
        &self.0
    }

    /// `self + other`.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// `self - other`.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    /// `self * k`.
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// `self / k`.
    ///
    /// Returns [`MathError::DivideByZero`] when `k == 0` instead of
    /// producing infinities or NaN.
    pub fn divide(self, k: f64) -> Result<Self> {
        if k == 0.0 {
            return Err(MathError::DivideByZero);
        }
        Ok(Self(self.0 / k))
    }

    /// Negated vector.
    #[inline]
    pub fn neg(self) -> Self {
        Self(-self.0)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.0.norm_squared()
    }

    /// Euclidean length.
    ///
    /// Computed with `hypot`, so components near the limits of `f64` don't
    /// overflow to infinity or underflow to zero on the way.
    #[inline]
    pub fn length(self) -> f64 {
        self.x().hypot(self.y()).hypot(self.z())
    }

    /// Squared distance between two points.
    #[inline]
    pub fn squared_distance(self, other: Self) -> f64 {
        self.sub(other).length_squared()
    }

    /// Scale to unit length.
    ///
    /// A vector whose length is exactly zero comes back unchanged, so
    /// normalizing a default vector is idempotent.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return self;
        }
        Self(self.0 / length)
    }

    /// Scale to unit length, or `None` if the length is zero, infinite or
    /// not a number.
    pub fn try_normalize(self) -> Option<Self> {
        let length = self.length();
        if !(length > 0.0) || !length.is_finite() {
            return None;
        }
        Some(Self(self.0 / length))
    }

    /// Compare with another vector under `tol`.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.vectors_equal(self, other)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl From<Vector> for Vec3 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        [v.x(), v.y(), v.z()]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::neg(self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        self.scale(k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}
