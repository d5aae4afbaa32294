use crate::{Interval, Ray, Vec3};

/// Axis-aligned box given by two opposite corners.
///
/// The corners are stored exactly as given: callers are responsible for
/// `min < max` on every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Get the extent along a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => Interval::new(self.min.x, self.max.x),
            1 => Interval::new(self.min.y, self.max.y),
            _ => Interval::new(self.min.z, self.max.z),
        }
    }

    /// Returns true if every component of `min` is strictly below `max`.
    pub fn is_well_formed(&self) -> bool {
        self.min.cmplt(self.max).all()
    }

    /// Distance along `r` to the nearest point where the ray meets the box.
    ///
    /// Slab method: the parameter range `[t_min, t_max]` starts unbounded
    /// and is narrowed by each axis pair of planes. The entry distance is
    /// returned when it is non-negative, otherwise the exit distance (the
    /// origin is inside the box). Returns `None` when the range empties or
    /// the box lies behind the origin.
    ///
    /// Direction components are divided directly. A zero component yields
    /// `±inf` (or NaN for an origin exactly on a slab plane); `Interval::narrow`
    /// skips NaN bounds, so axis-parallel rays still resolve to a
    /// deterministic hit or miss.
    pub fn hit_distance(&self, r: &Ray) -> Option<f32> {
        let mut ray_t = Interval::UNIVERSE;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let origin = r.origin[axis];
            let dir = r.direction[axis];

            let mut t0 = (slab.min - origin) / dir;
            let mut t1 = (slab.max - origin) / dir;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t = ray_t.narrow(t0, t1);
            if ray_t.is_empty() {
                return None;
            }
        }

        let t = if ray_t.min >= 0.0 { ray_t.min } else { ray_t.max };
        (t >= 0.0).then_some(t)
    }

    /// Outward normal of the face whose plane lies nearest to `p`.
    ///
    /// Ties go to X, then Y, then Z, and to the min face before the max face.
    pub fn face_normal(&self, p: Vec3) -> Vec3 {
        let faces = [
            ((p.x - self.min.x).abs(), Vec3::NEG_X),
            ((p.x - self.max.x).abs(), Vec3::X),
            ((p.y - self.min.y).abs(), Vec3::NEG_Y),
            ((p.y - self.max.y).abs(), Vec3::Y),
            ((p.z - self.min.z).abs(), Vec3::NEG_Z),
            ((p.z - self.max.z).abs(), Vec3::Z),
        ];

        let mut best = faces[0];
        for face in &faces[1..] {
            if face.0 < best.0 {
                best = *face;
            }
        }
        best.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::new(-1.0, -1.0, 1.0), Vec3::new(1.0, 1.0, 2.0))
    }

    #[test]
    fn test_aabb_hit_front_face() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(unit_box().hit_distance(&ray), Some(1.0));
    }

    #[test]
    fn test_aabb_hit_from_inside_returns_exit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.5), Vec3::Z);
        assert_eq!(unit_box().hit_distance(&ray), Some(0.5));
    }

    #[test]
    fn test_aabb_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(unit_box().hit_distance(&ray), None);
    }

    #[test]
    fn test_aabb_miss_to_the_side() {
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(unit_box().hit_distance(&ray), None);
    }

    #[test]
    fn test_aabb_axis_parallel_rays_are_deterministic() {
        let aabb = unit_box();

        // Zero x/y components: inside both slabs, so only z decides.
        let inside = Ray::new(Vec3::new(0.5, -0.5, 0.0), Vec3::Z);
        assert_eq!(aabb.hit_distance(&inside), Some(1.0));

        // Outside the x slab on either side: (+inf, +inf) or (-inf, -inf).
        let left = Ray::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::Z);
        let right = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(aabb.hit_distance(&left), None);
        assert_eq!(aabb.hit_distance(&right), None);

        // Origin exactly on the x = max plane: 0/0 is NaN and gets skipped.
        let grazing = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        assert_eq!(aabb.hit_distance(&grazing), aabb.hit_distance(&grazing));
        assert_eq!(aabb.hit_distance(&grazing), Some(1.0));
    }

    #[test]
    fn test_aabb_diagonal_hit() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let dir = Vec3::new(1.0, 1.0, 1.0).normalize();
        let ray = Ray::new(Vec3::splat(-5.0), dir);

        let t = aabb.hit_distance(&ray).unwrap();
        assert!((ray.at(t) - Vec3::splat(-1.0)).length() < 1e-4);
    }

    #[test]
    fn test_aabb_face_normal() {
        let aabb = unit_box();

        assert_eq!(aabb.face_normal(Vec3::new(0.0, 0.0, 1.0)), Vec3::NEG_Z);
        assert_eq!(aabb.face_normal(Vec3::new(0.0, 0.0, 2.0)), Vec3::Z);
        assert_eq!(aabb.face_normal(Vec3::new(1.0, 0.2, 1.5)), Vec3::X);
        assert_eq!(aabb.face_normal(Vec3::new(0.3, -1.0, 1.5)), Vec3::NEG_Y);
        // Edge: x wins the tie.
        assert_eq!(aabb.face_normal(Vec3::new(-1.0, -1.0, 1.5)), Vec3::NEG_X);
    }
}
