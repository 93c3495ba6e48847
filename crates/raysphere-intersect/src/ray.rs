//! Ray representation.

use log::debug;
use raysphere_math::Vector;
use serde::{Deserialize, Serialize};

use crate::{GeometryError, Result};

/// A ray in 3D space defined by origin and unit direction.
///
/// The ray covers `origin + t * direction` for `t > 0`; points behind the
/// origin are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRay")]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vector,
    /// Unit direction of the ray.
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction is normalized, so callers may pass any non-zero vector.
    /// A direction whose length is zero, infinite or NaN yields
    /// [`GeometryError::DegenerateDirection`].
    pub fn new(origin: Vector, direction: Vector) -> Result<Self> {
        let Some(direction) = direction.try_normalize() else {
            debug!("rejecting ray at {origin:?}: degenerate direction {direction:?}");
            return Err(GeometryError::DegenerateDirection);
        };
        Ok(Self { origin, direction })
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Vector {
        self.origin.add(self.direction.scale(t))
    }
}

/// Unvalidated wire form of a [`Ray`].
#[derive(Deserialize)]
struct RawRay {
    origin: Vector,
    direction: Vector,
}

impl TryFrom<RawRay> for Ray {
    type Error = GeometryError;

    fn try_from(raw: RawRay) -> Result<Self> {
        Ray::new(raw.origin, raw.direction)
    }
}
