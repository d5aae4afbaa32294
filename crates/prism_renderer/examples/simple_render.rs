//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it to PPM format.

use prism_core::{CameraSettings, Cube, Light, Plane, RenderSettings, Sphere, Surface};
use prism_renderer::{render_parallel, Camera, Color, RenderConfig, Scene, Vec3};

fn main() {
    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let scene = build_scene();
    println!(
        "Scene has {} primitives and {} lights",
        scene.primitive_count(),
        scene.light_count()
    );

    // Set up camera
    let camera = Camera::from(&CameraSettings::new(
        Vec3::new(0.0, 1.5, -4.0), // position
        Vec3::new(0.0, 0.0, 2.0),  // look_at
    ));

    // Render configuration
    let settings = RenderSettings::default()
        .with_resolution(800, 450)
        .with_max_depth(6)
        .with_background(Color::new(0.05, 0.05, 0.08));
    let config = RenderConfig::from(&settings);

    println!("Rendering {}x{} @ depth {}...", settings.width, settings.height, config.max_depth);

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, &camera, settings.width, settings.height, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    image.save_ppm(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple");

    // Ground
    scene.add_plane(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::Y,
        Color::new(0.5, 0.5, 0.5),
        0.3,
    ));

    // Glass ball in front of a mirror ball
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 0.0, 1.0),
        1.0,
        Surface::diffuse(Color::new(0.1, 0.1, 0.1)).with_transmission(0.9, 1.5),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(-2.5, 0.0, 3.0),
        1.0,
        Surface::diffuse(Color::new(0.2, 0.2, 0.2)).with_reflectivity(0.8),
    ));

    // A matte box on the right
    scene.add_cube(Cube::new(
        Vec3::new(1.5, -1.0, 2.0),
        Vec3::new(3.0, 0.5, 3.5),
        Surface::diffuse(Color::new(0.8, 0.4, 0.1)),
    ));

    scene.add_light(Light::new(Vec3::new(0.0, 8.0, -2.0), Color::new(1.0, 1.0, 1.0)));
    scene.add_light(Light::new(Vec3::new(-6.0, 4.0, 0.0), Color::new(0.3, 0.3, 0.4)));

    scene
}
