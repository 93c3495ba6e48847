#![warn(missing_docs)]

//! Ray-sphere intersection kernel.
//!
//! Finds where a ray first meets a sphere and the outward surface normal
//! there. Meant to sit in the innermost loop of a ray tracer, so everything
//! is a `Copy` value and every query is a pure function.
//!
//! # Architecture
//!
//! - [`Ray`] - Origin and unit direction, validated on construction
//! - [`Sphere`] - Center and radius with precomputed `1/r` and `r^2`
//! - [`intersect`] - Algebraic and geometric solvers plus [`IntersectConfig`]
//! - [`GeometryError`] - Construction failures
//!
//! # Example
//!
//! ```
//! use raysphere_intersect::{intersect_geometric, Ray, Sphere};
//! use raysphere_math::Vector;
//!
//! let sphere = Sphere::new(Vector::new(3.0, 0.0, 5.0), 3.0)?;
//! let ray = Ray::new(Vector::new(1.0, -2.0, -1.0), Vector::new(1.0, 2.0, 4.0))?;
//!
//! if let Some(hit) = intersect_geometric(&sphere, &ray) {
//!     let normal = sphere.unit_normal_at(hit.point);
//!     assert!(normal.dot(ray.direction) < 0.0);
//! }
//! # Ok::<(), raysphere_intersect::GeometryError>(())
//! ```

mod error;
mod ray;
mod sphere;
pub mod intersect;

pub use error::{GeometryError, Result};
pub use intersect::{
    hits_agree, intersect_algebraic, intersect_algebraic_forward, intersect_geometric,
    BehindOrigin, IntersectConfig, Method, SphereHit,
};
pub use ray::Ray;
pub use sphere::Sphere;
