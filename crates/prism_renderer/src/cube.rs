//! Axis-aligned cube intersection via the slab test.

use crate::hittable::Hittable;
use prism_core::{Cube, Surface};
use prism_math::{Ray, Vec3};

impl Hittable for Cube {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.bounds().hit_distance(ray)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.bounds().face_normal(point)
    }

    fn surface(&self) -> Surface {
        self.surface
    }
}
