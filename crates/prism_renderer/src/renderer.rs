//! Core Whitted-style ray tracing renderer.
//!
//! Implements recursive ray tracing with:
//! - Diffuse (and optional Phong) direct lighting without shadow rays
//! - Mirror reflection
//! - Snell refraction with total internal reflection
//!
//! The hot path never fails: depth exhaustion yields black, total internal
//! reflection yields no refracted contribution, and degenerate geometry
//! propagates IEEE infinities or NaNs instead of panicking.

use std::time::Instant;

use prism_core::{Color, ReflectionBlend, RenderSettings, Scene};
use prism_math::{reflect, refract, Interval, Ray, Vec3};

use crate::hittable::closest_hit;
use crate::lighting::local_illumination;
use crate::Camera;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum ray recursion depth
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// How reflected light combines with the local color
    pub reflection_blend: ReflectionBlend,
    /// Phong exponent for the optional specular term
    pub specular_exponent: Option<f32>,
    /// Offset for secondary ray origins, along the surface normal
    pub surface_bias: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(&RenderSettings::default())
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            background: settings.background,
            reflection_blend: settings.reflection_blend,
            specular_exponent: settings.specular_exponent,
            surface_bias: settings.surface_bias,
        }
    }
}

/// Compute the color seen along a ray.
///
/// `depth` is the remaining recursion budget; zero returns black.
/// Reflected and refracted rays are traced with `depth - 1`.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = closest_hit(scene, ray) else {
        return config.background;
    };

    let direction = ray.direction();
    let surface = hit.surface;
    let bias = config.surface_bias;

    let mut color = local_illumination(&hit, ray.origin(), &scene.lights, config.specular_exponent);

    // Secondary origins are pushed off the surface along the normal that
    // faces the incoming ray: reflections toward it, refractions away.
    let facing = hit.facing_normal(direction);

    if surface.reflectivity > 0.0 {
        let reflected_ray = Ray::new(hit.point + facing * bias, reflect(direction, hit.normal));
        let reflected = trace_ray(&reflected_ray, scene, depth - 1, config);

        color = match config.reflection_blend {
            ReflectionBlend::Additive => color + reflected * surface.reflectivity,
            ReflectionBlend::Lerp => {
                color * (1.0 - surface.reflectivity) + reflected * surface.reflectivity
            }
        };
    }

    if surface.transmissivity > 0.0 {
        let eta = if hit.is_entering(direction) {
            1.0 / surface.refractive_index
        } else {
            surface.refractive_index
        };

        let refracted_dir = refract(direction, facing, eta);
        // A zero vector signals total internal reflection.
        if refracted_dir != Vec3::ZERO {
            let refracted_ray = Ray::new(hit.point - facing * bias, refracted_dir);
            let refracted = trace_ray(&refracted_ray, scene, depth - 1, config);
            color += refracted * surface.transmissivity;
        }
    }

    color
}

/// Map a linear channel value to 8 bits: `round(c * 255)` clamped to [0, 255].
///
/// NaN channels map to 0.
#[inline]
pub fn quantize_channel(channel: f32) -> u8 {
    Interval::CHANNEL.clamp((channel * 255.0).round()) as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        quantize_channel(color.x),
        quantize_channel(color.y),
        quantize_channel(color.z),
    ]
}

/// Convert a color to 8-bit RGBA with opaque alpha.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let [r, g, b] = color_to_rgb(color);
    [r, g, b, 255]
}

/// Render a single pixel.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.get_ray(x, y, width, height);
    trace_ray(&ray, scene, config.max_depth, config)
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored unclamped, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Offset of (x, y) in `pixels`.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let rgb: Vec<[u8; 3]> = self.pixels.iter().map(|c| color_to_rgb(*c)).collect();
        bytemuck::cast_slice(&rgb).to_vec()
    }

    /// Convert to packed 8-bit RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let rgba: Vec<[u8; 4]> = self.pixels.iter().map(|c| color_to_rgba(*c)).collect();
        bytemuck::cast_slice(&rgba).to_vec()
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded nested loop over every pixel; see
/// [`render_parallel`](crate::render_parallel) for the bucketed version.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let start = Instant::now();
    log::info!(
        "Rendering '{}' at {}x{}, depth {} (serial)",
        scene.name,
        width,
        height,
        config.max_depth
    );

    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let color = render_pixel(scene, camera, x, y, width, height, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{presets, Cube, Light, Plane, Sphere, Surface};
    use prism_math::Vec3;

    fn config() -> RenderConfig {
        RenderConfig {
            background: Color::splat(0.1),
            ..RenderConfig::default()
        }
    }

    fn lit_scene() -> Scene {
        let mut scene = Scene::new("lit");
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Surface::diffuse(Color::new(1.0, 0.0, 0.0)).with_reflectivity(0.5),
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, -10.0), Color::ONE));
        scene
    }

    #[test]
    fn test_depth_zero_is_black() {
        let file = presets::glass_and_cubes();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(trace_ray(&ray, &file.scene, 0, &config()), Color::ZERO);
        assert_eq!(trace_ray(&ray, &lit_scene(), 0, &config()), Color::ZERO);
        assert_eq!(trace_ray(&ray, &Scene::default(), 0, &config()), Color::ZERO);
    }

    #[test]
    fn test_miss_returns_background() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(trace_ray(&ray, &lit_scene(), 5, &config()), Color::splat(0.1));

        let black = RenderConfig::default();
        assert_eq!(trace_ray(&ray, &lit_scene(), 5, &black), Color::ZERO);
    }

    #[test]
    fn test_reflection_blend_policies() {
        // Head-on hit: the reflected ray goes straight back to the
        // background, and the light behind the eye gives full diffuse.
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let scene = lit_scene();

        let additive = trace_ray(&ray, &scene, 5, &config());
        assert!((additive - Color::new(1.05, 0.05, 0.05)).length() < 1e-5);

        let lerp_config = RenderConfig {
            reflection_blend: ReflectionBlend::Lerp,
            ..config()
        };
        let lerp = trace_ray(&ray, &scene, 5, &lerp_config);
        assert!((lerp - Color::new(0.55, 0.05, 0.05)).length() < 1e-5);
    }

    #[test]
    fn test_depth_one_skips_secondary_rays() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let color = trace_ray(&ray, &lit_scene(), 1, &config());

        // The reflected ray has no budget left and contributes black.
        assert!((color - Color::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_no_shadow_rays() {
        let mut scene = Scene::new("occluded");
        scene.add_plane(Plane::new(Vec3::ZERO, Vec3::Y, Color::ONE, 0.0));
        // A box between the floor and the light does not cast a shadow.
        scene.add_cube(Cube::new(
            Vec3::new(-5.0, 2.0, -5.0),
            Vec3::new(5.0, 3.0, 5.0),
            Surface::diffuse(Color::ONE),
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), Color::ONE));

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let color = trace_ray(&ray, &scene, 5, &config());
        assert!((color - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn test_transparent_sphere_passes_background_through() {
        let mut scene = Scene::new("glass");
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Surface::diffuse(Color::ZERO).with_transmission(1.0, 1.5),
        ));

        // No lights: the only light is the background seen through the sphere.
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let color = trace_ray(&ray, &scene, 5, &config());
        assert!((color - Color::splat(0.1)).length() < 1e-5);

        // Two surfaces need three levels: entry, exit, background.
        let shallow = trace_ray(&ray, &scene, 2, &config());
        assert_eq!(shallow, Color::ZERO);
    }

    #[test]
    fn test_total_internal_reflection_drops_refraction() {
        let mut scene = Scene::new("tir");
        scene.add_sphere(Sphere::new(
            Vec3::ZERO,
            1.0,
            Surface::diffuse(Color::ZERO).with_transmission(1.0, 1.5),
        ));

        // From inside, a steep ray meets the surface well beyond the
        // critical angle, so nothing is transmitted.
        let dir = Vec3::new(1.0, 0.0, 0.05).normalize();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.95), dir);
        let color = trace_ray(&ray, &scene, 5, &config());
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_quantize_channel() {
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(1.0), 255);
        assert_eq!(quantize_channel(0.5), 128);
        assert_eq!(quantize_channel(3.7), 255);
        assert_eq!(quantize_channel(-0.4), 0);
        assert_eq!(quantize_channel(f32::NAN), 0);
        assert_eq!(quantize_channel(f32::INFINITY), 255);
    }

    #[test]
    fn test_image_buffer_bytes() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Color::new(1.0, 0.5, -1.0));

        assert_eq!(image.get(1, 0), Color::new(1.0, 0.5, -1.0));
        assert_eq!(image.to_rgb8(), vec![0, 0, 0, 255, 128, 0]);
        assert_eq!(image.to_rgba(), vec![0, 0, 0, 255, 255, 128, 0, 255]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_image_index_past_u32_range() {
        // Only the index math is exercised; the buffer stays empty.
        let image = ImageBuffer {
            width: 65536,
            height: 65537,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(0, 65536), 65536 * 65536);
        assert_eq!(image.index(65535, 65536), 65536 * 65536 + 65535);
    }

    #[test]
    fn test_render_small_frame() {
        let file = presets::classic_spheres();
        let camera = Camera::from(&file.camera);
        let config = RenderConfig::from(&file.render);

        let image = render(&file.scene, &camera, 24, 20, &config);
        assert_eq!(image.pixels.len(), 24 * 20);
        // Top row looks at the sky.
        assert_eq!(image.get(12, 0), Color::splat(0.1));
        // Bottom row looks at the floor.
        assert_ne!(image.get(12, 19), Color::splat(0.1));
    }
}
