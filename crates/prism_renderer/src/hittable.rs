//! Hittable trait, HitRecord and the nearest-hit scan over a scene.

use prism_core::{Scene, Surface};
use prism_math::{Ray, Vec3};

/// Record of the nearest ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward geometric normal at the intersection (not flipped toward the ray)
    pub normal: Vec3,
    /// Optical properties of the primitive that was hit
    pub surface: Surface,
}

impl HitRecord {
    /// Whether the ray arrives from the side the normal points to.
    #[inline]
    pub fn is_entering(&self, direction: Vec3) -> bool {
        direction.dot(self.normal) < 0.0
    }

    /// The normal oriented against `direction`.
    #[inline]
    pub fn facing_normal(&self, direction: Vec3) -> Vec3 {
        if self.is_entering(direction) {
            self.normal
        } else {
            -self.normal
        }
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance along the ray to the nearest hit with `t >= 0`, if any.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward surface normal at a point on the primitive.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Optical properties of the primitive.
    fn surface(&self) -> Surface;
}

/// Scan `objects` in order, keeping a hit only when it is strictly closer
/// than the best so far, so earlier objects win ties.
fn scan<'a, H: Hittable + 'a>(
    objects: impl IntoIterator<Item = &'a H>,
    ray: &Ray,
    closest: &mut Option<(f32, &'a dyn Hittable)>,
) {
    for object in objects {
        if let Some(t) = object.intersect(ray) {
            let closer = match closest {
                Some((t_min, _)) => t < *t_min,
                None => true,
            };
            if closer {
                let object: &'a dyn Hittable = object;
                *closest = Some((t, object));
            }
        }
    }
}

/// Find the nearest intersection among every primitive in the scene.
///
/// Spheres are scanned first, then planes, then cubes.
pub fn closest_hit(scene: &Scene, ray: &Ray) -> Option<HitRecord> {
    let mut closest: Option<(f32, &dyn Hittable)> = None;

    scan(&scene.spheres, ray, &mut closest);
    scan(&scene.planes, ray, &mut closest);
    scan(&scene.cubes, ray, &mut closest);

    closest.map(|(t, object)| {
        let point = ray.at(t);
        HitRecord {
            t,
            point,
            normal: object.normal_at(point),
            surface: object.surface(),
        }
    })
}
