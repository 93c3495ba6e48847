//! Ray-sphere intersection by solving the quadratic equation.

use raysphere_math::square;

use super::{BehindOrigin, SphereHit};
use crate::{Ray, Sphere};

/// Intersect a ray with a sphere by substituting the ray into the sphere
/// equation and solving `t^2 + b*t + c = 0` (`a == 1` for a unit direction).
///
/// The nearer root `t0` is returned when it is non-negative. Otherwise the
/// farther root `t1` is returned **without** checking its sign, so a sphere
/// lying entirely behind the ray still yields a point with negative `t`.
/// Use [`intersect_algebraic_forward`] to reject that case.
pub fn intersect_algebraic(sphere: &Sphere, ray: &Ray) -> Option<SphereHit> {
    solve(sphere, ray, BehindOrigin::Report)
}

/// Same as [`intersect_algebraic`], but returns `None` when both roots lie
/// behind the ray origin.
pub fn intersect_algebraic_forward(sphere: &Sphere, ray: &Ray) -> Option<SphereHit> {
    solve(sphere, ray, BehindOrigin::Reject)
}

#[inline]
fn solve(sphere: &Sphere, ray: &Ray, behind: BehindOrigin) -> Option<SphereHit> {
    let b = 2.0 * ray.direction.dot(ray.origin.sub(sphere.center()));
    let c = ray.origin.squared_distance(sphere.center()) - sphere.squared_radius();

    let discriminant = square(b) - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t0 = (-b - sqrt_discriminant) / 2.0;
    if t0 >= 0.0 {
        return Some(SphereHit::at(ray, t0));
    }

    // Origin is inside the sphere, or the sphere is behind the ray.
    let t1 = (-b + sqrt_discriminant) / 2.0;
    if t1 < 0.0 && behind == BehindOrigin::Reject {
        return None;
    }
    Some(SphereHit::at(ray, t1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use raysphere_math::Vector;

    fn sphere(c: [f64; 3], r: f64) -> Sphere {
        Sphere::new(c.into(), r).unwrap()
    }

    fn ray(o: [f64; 3], d: [f64; 3]) -> Ray {
        Ray::new(o.into(), d.into()).unwrap()
    }

    #[test]
    fn test_through_center() {
        let s = sphere([0.0, 0.0, 0.0], 5.0);
        let r = ray([-10.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let hit = intersect_algebraic(&s, &r).unwrap();
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point.x(), -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_miss() {
        let s = sphere([0.0, 0.0, 0.0], 5.0);
        let r = ray([-10.0, 10.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(intersect_algebraic(&s, &r).is_none());
        assert!(intersect_algebraic_forward(&s, &r).is_none());
    }

    #[test]
    fn test_tangent_single_point() {
        let s = sphere([0.0, 0.0, 0.0], 5.0);
        let r = ray([5.0, -10.0, 0.0], [0.0, 1.0, 0.0]);
        let hit = intersect_algebraic(&s, &r).unwrap();
        assert_eq!(hit.t, 10.0);
        assert_eq!(hit.point, Vector::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_inside_returns_exit() {
        let s = sphere([0.0, 0.0, 0.0], 5.0);
        let r = ray([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let hit = intersect_algebraic(&s, &r).unwrap();
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point.x(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_golden_value() {
        let s = sphere([3.0, 0.0, 5.0], 3.0);
        let r = ray([1.0, -2.0, -1.0], [1.0, 2.0, 4.0]);
        let hit = intersect_algebraic(&s, &r).unwrap();
        assert_relative_eq!(hit.t, 3.7434771541728296, max_relative = 1e-12);
        assert_relative_eq!(hit.point.x(), 1.8168936867302317, max_relative = 1e-12);
        assert_relative_eq!(hit.point.y(), -0.3662126265395367, max_relative = 1e-12);
        assert_relative_eq!(hit.point.z(), 2.2675747469209266, max_relative = 1e-12);
    }

    #[test]
    fn test_sphere_behind_reports_negative_t() {
        // Both roots negative: the compatible solver still reports the far root.
        let s = sphere([0.0, 0.0, 0.0], 1.0);
        let r = ray([5.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let hit = intersect_algebraic(&s, &r).unwrap();
        assert_relative_eq!(hit.t, -4.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point.x(), 1.0, epsilon = 1e-12);

        assert!(intersect_algebraic_forward(&s, &r).is_none());
    }

    #[test]
    fn test_origin_on_surface_pointing_in() {
        let s = sphere([0.0, 0.0, 0.0], 2.0);
        let r = ray([-2.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        // c == 0 so t0 == 0: the origin itself is the hit.
        let hit = intersect_algebraic(&s, &r).unwrap();
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.point, Vector::new(-2.0, 0.0, 0.0));
    }
}
