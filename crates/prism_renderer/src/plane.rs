//! Infinite plane intersection.

use crate::hittable::Hittable;
use prism_core::{Plane, Surface};
use prism_math::{Ray, Vec3};

/// Rays this close to parallel with the plane never hit it.
const PARALLEL_EPSILON: f32 = 1e-6;

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        (t >= 0.0).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn surface(&self) -> Surface {
        Plane::surface(self)
    }
}
