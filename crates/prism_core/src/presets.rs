//! Built-in scenes.
//!
//! Each preset is a complete `SceneFile` so it can be rendered directly or
//! exported as a starting point for a hand-written scene.

use prism_math::Vec3;

use crate::error::{SceneError, SceneResult};
use crate::scene::{Color, Cube, Light, Plane, Scene, Sphere, Surface};
use crate::settings::{CameraSettings, ReflectionBlend, RenderSettings, SceneFile};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &["classic_spheres", "glass_and_cubes"];

/// Look up a preset by name.
pub fn preset(name: &str) -> SceneResult<SceneFile> {
    match name {
        "classic_spheres" => Ok(classic_spheres()),
        "glass_and_cubes" => Ok(glass_and_cubes()),
        other => Err(SceneError::UnknownPreset(other.to_string())),
    }
}

/// Three mirrored spheres over a grey floor.
///
/// Reflections interpolate with the local color and a Phong highlight is
/// added per light.
pub fn classic_spheres() -> SceneFile {
    let mut scene = Scene::new("classic_spheres");

    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 0.0, -5.0),
        1.0,
        Surface::diffuse(Color::new(1.0, 0.0, 0.0)).with_reflectivity(0.5),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(2.0, 1.0, -6.0),
        1.0,
        Surface::diffuse(Color::new(0.0, 1.0, 0.0)).with_reflectivity(0.3),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(-2.0, 1.0, -7.0),
        1.0,
        Surface::diffuse(Color::new(0.0, 0.0, 1.0)).with_reflectivity(0.7),
    ));

    scene.add_plane(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Color::splat(0.5),
        0.2,
    ));

    scene.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), Color::ONE));
    scene.add_light(Light::new(Vec3::new(-5.0, 5.0, 5.0), Color::splat(0.5)));

    SceneFile {
        scene,
        camera: CameraSettings::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -3.0)),
        render: RenderSettings {
            background: Color::splat(0.1),
            reflection_blend: ReflectionBlend::Lerp,
            specular_exponent: Some(32.0),
            surface_bias: 1e-3,
            ..RenderSettings::default()
        },
    }
}

/// Two spheres, two boxes and a floor; one sphere and one box are
/// transparent.
pub fn glass_and_cubes() -> SceneFile {
    let mut scene = Scene::new("glass_and_cubes");

    scene.add_sphere(Sphere::new(
        Vec3::new(-1.0, 0.0, 3.0),
        1.0,
        Surface::diffuse(Color::new(1.0, 0.2, 0.2)).with_reflectivity(0.3),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(0.8, -0.25, 2.2),
        0.7,
        Surface::diffuse(Color::new(0.9, 0.9, 1.0))
            .with_reflectivity(0.1)
            .with_transmission(0.8, 1.5),
    ));

    scene.add_plane(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Color::splat(0.5),
        0.2,
    ));

    scene.add_cube(Cube::new(
        Vec3::new(-3.0, -1.0, 4.0),
        Vec3::new(-2.0, 0.5, 5.0),
        Surface::diffuse(Color::new(0.2, 0.8, 0.2)).with_reflectivity(0.2),
    ));
    scene.add_cube(Cube::new(
        Vec3::new(1.0, -1.0, 4.5),
        Vec3::new(2.2, 0.2, 5.7),
        Surface::diffuse(Color::new(0.3, 0.3, 0.9)).with_transmission(0.5, 1.3),
    ));

    scene.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), Color::ONE));
    scene.add_light(Light::new(Vec3::new(-5.0, 5.0, -5.0), Color::splat(0.5)));

    SceneFile {
        scene,
        camera: CameraSettings::new(Vec3::new(0.0, 2.0, -0.5), Vec3::new(-1.0, 0.0, 3.0)),
        render: RenderSettings::default()
            .with_resolution(1200, 1000)
            .with_max_depth(5)
            .with_background(Color::ZERO),
    }
}
