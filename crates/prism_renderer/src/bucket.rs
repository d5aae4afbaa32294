//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Every pixel is a pure function of the
//! read-only scene, so the result matches the serial renderer exactly.

use std::time::Instant;

use prism_core::{Color, Scene};
use rayon::prelude::*;

use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use crate::Camera;

/// A rectangular tile of the image, rendered as one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Left edge in image pixels
    pub x: u32,
    /// Top edge in image pixels
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order (0 is rendered first)
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Image coordinates covered by this bucket, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }

    /// Squared distance from the bucket's center to the point (cx, cy).
    fn center_distance_sq(&self, cx: f32, cy: f32) -> f32 {
        let dx = self.x as f32 + self.width as f32 * 0.5 - cx;
        let dy = self.y as f32 + self.height as f32 * 0.5 - cy;
        dx * dx + dy * dy
    }
}

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile a `width` x `height` image into buckets of at most `bucket_size`
/// pixels on a side, ordered from the image center outward.
///
/// Buckets on the right and bottom edges are clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width)
                .step_by(size as usize)
                .map(move |x| Bucket::new(x, y, size.min(width - x), size.min(height - y), 0))
        })
        .collect();

    // Stable sort keeps row-major order among equidistant buckets.
    let (cx, cy) = (width as f32 * 0.5, height as f32 * 0.5);
    buckets.sort_by(|a, b| {
        a.center_distance_sq(cx, cy)
            .total_cmp(&b.center_distance_sq(cx, cy))
    });

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }

    buckets
}

/// Render the pixels of one bucket, row-major within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    camera: &Camera,
    image_width: u32,
    image_height: u32,
    config: &RenderConfig,
) -> Vec<Color> {
    bucket
        .pixels()
        .map(|(x, y)| render_pixel(scene, camera, x, y, image_width, image_height, config))
        .collect()
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into their place in the full image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let width = self.bucket.width as usize;
        for (row, chunk) in self.pixels.chunks(width).enumerate() {
            let y = self.bucket.y as usize + row;
            let start = y * image.width as usize + self.bucket.x as usize;
            image.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }
}

/// Render the scene in parallel buckets of `bucket_size` pixels.
pub fn render_buckets(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    config: &RenderConfig,
    bucket_size: u32,
) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(width, height, bucket_size);
    log::info!(
        "Rendering '{}' at {}x{}, depth {} ({} buckets on {} threads)",
        scene.name,
        width,
        height,
        config.max_depth,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, scene, camera, width, height, config);
            log::debug!("Bucket {} at ({}, {}) done", bucket.index, bucket.x, bucket.y);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

/// Render the scene in parallel using [`DEFAULT_BUCKET_SIZE`] buckets.
pub fn render_parallel(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    render_buckets(scene, camera, width, height, config, DEFAULT_BUCKET_SIZE)
}
