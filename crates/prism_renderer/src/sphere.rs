//! Sphere intersection.

use crate::hittable::Hittable;
use prism_core::{Sphere, Surface};
use prism_math::{Ray, Vec3};

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Reduced quadratic; assumes a unit direction (a = 1).
        let oc = ray.origin() - self.center;
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first; fall back to the far root when the origin is
        // inside the sphere.
        let mut root = -b - sqrtd;
        if root < 0.0 {
            root = -b + sqrtd;
        }
        (root >= 0.0).then_some(root)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn surface(&self) -> Surface {
        self.surface
    }
}
