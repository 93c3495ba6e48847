//! Ray-sphere intersection by closest approach to the center.

use raysphere_math::square;

use super::SphereHit;
use crate::{Ray, Sphere};

/// Intersect a ray with a sphere using the geometric construction.
///
/// Projects the origin-to-center vector onto the ray to find the parameter
/// of closest approach `tca`, then steps back (origin outside) or forward
/// (origin inside or on the surface) by the half-chord length. Rejects a
/// sphere behind an outside origin before taking any square root, and never
/// reports a point behind the origin.
pub fn intersect_geometric(sphere: &Sphere, ray: &Ray) -> Option<SphereHit> {
    let oc = sphere.center().sub(ray.origin);
    let l2oc = oc.dot(oc);
    let outside = l2oc > sphere.squared_radius();

    let tca = oc.dot(ray.direction);
    if tca < 0.0 && outside {
        return None;
    }

    // Squared half-chord; negative when the closest approach misses.
    let t2hc = sphere.squared_radius() - (l2oc - square(tca));
    if t2hc < 0.0 {
        return None;
    }

    let t = if outside {
        tca - t2hc.sqrt()
    } else {
        tca + t2hc.sqrt()
    };
    Some(SphereHit::at(ray, t))
}
