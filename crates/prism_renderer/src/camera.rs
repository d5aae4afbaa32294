//! Pinhole camera for primary ray generation.

use prism_core::CameraSettings;
use prism_math::{Ray, Vec3};

/// Tangent of half the 90 degree field of view.
const FOV_SCALE: f32 = 1.0; // tan(pi / 4)

/// Camera with an orthonormal basis fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera at `position` looking at `look_at`.
    ///
    /// `up` is only a hint; the stored up vector is recomputed to be
    /// orthogonal to the view direction. A hint parallel to the view
    /// direction produces a NaN basis.
    pub fn new(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        let forward = (look_at - position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        Self {
            position,
            forward,
            right,
            up,
        }
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit vector pointing to the right of the image.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit vector pointing to the top of the image.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Direction through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image. The horizontal
    /// extent is widened by the aspect ratio.
    pub fn ray_direction(&self, x: u32, y: u32, image_width: u32, image_height: u32) -> Vec3 {
        let width = image_width as f32;
        let height = image_height as f32;
        let aspect_ratio = width / height;

        let px = (2.0 * (x as f32 + 0.5) / width - 1.0) * aspect_ratio * FOV_SCALE;
        let py = (1.0 - 2.0 * (y as f32 + 0.5) / height) * FOV_SCALE;

        (self.forward + self.right * px + self.up * py).normalize()
    }

    /// Primary ray through the center of pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32, image_width: u32, image_height: u32) -> Ray {
        Ray::new(self.position, self.ray_direction(x, y, image_width, image_height))
    }
}

impl From<&CameraSettings> for Camera {
    fn from(settings: &CameraSettings) -> Self {
        Camera::new(settings.position, settings.look_at, settings.up)
    }
}
