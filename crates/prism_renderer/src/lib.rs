//! Prism Renderer - recursive CPU ray tracing
//!
//! A Whitted-style ray tracer: nearest-hit search over spheres, planes and
//! axis-aligned cubes, diffuse lighting from point lights without shadow
//! rays, and recursive mirror reflection and Snell refraction.

mod bucket;
mod camera;
mod cube;
mod hittable;
mod lighting;
mod output;
mod plane;
mod renderer;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_buckets, render_parallel, Bucket, BucketResult,
    DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use hittable::{closest_hit, HitRecord, Hittable};
pub use lighting::local_illumination;
pub use renderer::{
    color_to_rgb, color_to_rgba, quantize_channel, render, render_pixel, trace_ray, ImageBuffer,
    RenderConfig,
};

/// Re-export Vec3 and the scene types from the lower crates
pub use prism_core::{Color, Scene, SceneFile};
pub use prism_math::{Ray, Vec3};

/// Render a scene file with its own camera and settings.
///
/// `parallel` selects bucketed rendering on the rayon thread pool.
pub fn render_scene_file(file: &SceneFile, parallel: bool) -> ImageBuffer {
    let camera = Camera::from(&file.camera);
    let config = RenderConfig::from(&file.render);
    let (width, height) = (file.render.width, file.render.height);

    if parallel {
        render_parallel(&file.scene, &camera, width, height, &config)
    } else {
        render(&file.scene, &camera, width, height, &config)
    }
}
