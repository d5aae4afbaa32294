//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/glass_and_cubes.json

use std::env;

use prism_core::SceneFile;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-json>");
        println!("\nExamples:");
        println!("  cargo run --example load_scene -- scenes/glass_and_cubes.json");
        println!("  cargo run --example load_scene -- scenes/classic_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match SceneFile::load(path) {
        Ok(file) => {
            let scene = &file.scene;
            println!("\n=== Scene: {} ===", scene.name);
            println!("Primitives: {}", scene.primitive_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Spheres ---");
            for (i, sphere) in scene.spheres.iter().enumerate() {
                println!(
                    "  [{}] center ({:.2}, {:.2}, {:.2}) r={:.2} refl={:.2} trans={:.2} ior={:.2}",
                    i,
                    sphere.center.x,
                    sphere.center.y,
                    sphere.center.z,
                    sphere.radius,
                    sphere.surface.reflectivity,
                    sphere.surface.transmissivity,
                    sphere.surface.refractive_index
                );
            }

            println!("\n--- Planes ---");
            for (i, plane) in scene.planes.iter().enumerate() {
                println!(
                    "  [{}] through ({:.2}, {:.2}, {:.2}) normal ({:.2}, {:.2}, {:.2})",
                    i,
                    plane.point.x,
                    plane.point.y,
                    plane.point.z,
                    plane.normal.x,
                    plane.normal.y,
                    plane.normal.z
                );
            }

            println!("\n--- Cubes ---");
            for (i, cube) in scene.cubes.iter().enumerate() {
                println!(
                    "  [{}] ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
                    i, cube.min.x, cube.min.y, cube.min.z, cube.max.x, cube.max.y, cube.max.z
                );
            }

            println!("\n--- Render ---");
            println!(
                "  {}x{}, depth {}, blend {:?}",
                file.render.width,
                file.render.height,
                file.render.max_depth,
                file.render.reflection_blend
            );
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
