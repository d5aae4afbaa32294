//! Local illumination from point lights.
//!
//! Every light reaches every point: there are no shadow rays, so a light
//! behind an opaque object still illuminates the surfaces it faces.

use prism_core::{Color, Light};
use prism_math::{reflect, Vec3};

use crate::hittable::HitRecord;

/// Direct light arriving at `hit` from every light in `lights`.
///
/// Diffuse term per light: `color * max(0, n·l) * intensity`. When
/// `specular_exponent` is set a Phong highlight `intensity * max(0, r·v)^e`
/// is added, with `v` pointing from the hit back to `eye` and
/// `r = l - 2(l·n)n`, the mirror of the direction toward the light.
pub fn local_illumination(
    hit: &HitRecord,
    eye: Vec3,
    lights: &[Light],
    specular_exponent: Option<f32>,
) -> Color {
    let mut color = Color::ZERO;

    for light in lights {
        let light_dir = (light.position - hit.point).normalize();

        let diffuse = hit.normal.dot(light_dir).max(0.0);
        color += hit.surface.color * diffuse * light.intensity;

        if let Some(exponent) = specular_exponent {
            let view_dir = (eye - hit.point).normalize();
            let reflect_dir = reflect(light_dir, hit.normal);
            let specular = view_dir.dot(reflect_dir).max(0.0).powf(exponent);
            color += light.intensity * specular;
        }
    }

    color
}
