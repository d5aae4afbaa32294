//! Mirror reflection and Snell refraction of direction vectors.

use crate::Vec3;

/// Reflect `d` about the surface normal `n`: `d - 2(d·n)n`.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - n * 2.0 * d.dot(n)
}

/// Refract the unit direction `i` through a surface with unit normal `n`.
///
/// `n` must face against `i` (so `-i·n` is the cosine of the incidence
/// angle) and `eta` is the ratio of refractive indices, outgoing medium
/// over incoming. Returns `Vec3::ZERO` on total internal reflection; any
/// other result is a unit vector.
#[inline]
pub fn refract(i: Vec3, n: Vec3, eta: f32) -> Vec3 {
    let cos_i = -i.dot(n);
    let sin2_t = eta * eta * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return Vec3::ZERO;
    }
    let cos_t = (1.0 - sin2_t).sqrt();
    i * eta + n * (eta * cos_i - cos_t)
}
