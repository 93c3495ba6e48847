//! Ray-sphere intersection algorithms.
//!
//! Two solvers answer the same question. [`intersect_algebraic`] solves the
//! quadratic obtained by substituting the ray into the sphere equation;
//! [`intersect_geometric`] works from the closest approach of the ray to the
//! sphere center and can reject misses without a square root. They are
//! interchangeable for well-formed input and differ only in rounding, plus
//! the documented behind-origin case of the algebraic solver.
//!
//! [`IntersectConfig`] picks a solver at runtime.

mod algebraic;
mod geometric;

pub use algebraic::{intersect_algebraic, intersect_algebraic_forward};
pub use geometric::intersect_geometric;

use log::trace;
use raysphere_math::{Tolerance, Vector};
use serde::{Deserialize, Serialize};

use crate::{Ray, Sphere};

/// Nearest intersection of a ray with a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereHit {
    /// Parameter along the ray.
    pub t: f64,
    /// 3D intersection point, `ray.at(t)`.
    pub point: Vector,
}

impl SphereHit {
    #[inline]
    pub(crate) fn at(ray: &Ray, t: f64) -> Self {
        Self { t, point: ray.at(t) }
    }

    /// Outward unit normal of `sphere` at the hit point.
    #[inline]
    pub fn normal(&self, sphere: &Sphere) -> Vector {
        sphere.unit_normal_at(self.point)
    }

    /// Whether the hit lies on the ray rather than behind its origin.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.t >= 0.0
    }
}

/// Check whether two intersection outcomes agree under `tol`.
///
/// Both must miss, or both must hit at matching `t` and point.
pub fn hits_agree(a: Option<SphereHit>, b: Option<SphereHit>, tol: Tolerance) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            tol.scalars_equal(a.t, b.t) && tol.vectors_equal(&a.point, &b.point)
        }
        _ => false,
    }
}

/// Intersection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Quadratic formula, see [`intersect_algebraic`].
    Algebraic,
    /// Closest approach, see [`intersect_geometric`].
    #[default]
    Geometric,
}

impl Method {
    /// Every available method.
    pub const ALL: [Method; 2] = [Method::Algebraic, Method::Geometric];

    /// Kebab-case name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Method::Algebraic => "algebraic",
            Method::Geometric => "geometric",
        }
    }
}

/// What to do when the only root lies behind the ray origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehindOrigin {
    /// Return the point anyway, with negative `t`.
    Report,
    /// Treat it as a miss.
    #[default]
    Reject,
}

/// Runtime selection of intersection behavior.
///
/// ```toml
/// method = "algebraic"
/// behind-origin = "report"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IntersectConfig {
    /// Solver to run.
    pub method: Method,
    /// Behind-origin policy. The geometric solver always rejects.
    pub behind_origin: BehindOrigin,
}

impl IntersectConfig {
    /// Algebraic solver with the unchecked far-root fallthrough, for
    /// comparisons against results produced by older tooling.
    pub const COMPAT: Self = Self {
        method: Method::Algebraic,
        behind_origin: BehindOrigin::Report,
    };

    /// Config running `method` with the default policy.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Intersect `ray` with `sphere` using the configured solver.
    pub fn intersect(&self, sphere: &Sphere, ray: &Ray) -> Option<SphereHit> {
        let hit = match (self.method, self.behind_origin) {
            (Method::Algebraic, BehindOrigin::Report) => intersect_algebraic(sphere, ray),
            (Method::Algebraic, BehindOrigin::Reject) => intersect_algebraic_forward(sphere, ray),
            (Method::Geometric, _) => intersect_geometric(sphere, ray),
        };
        trace!("{} intersection: {:?}", self.method.name(), hit);
        hit
    }
}
