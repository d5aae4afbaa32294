//! Camera and render settings, and the JSON scene file that bundles them
//! with a scene.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::scene::{Color, Scene};

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub position: Vec3,
    pub look_at: Vec3,
    /// World-up hint used to build the camera basis
    #[serde(default = "default_up")]
    pub up: Vec3,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

impl CameraSettings {
    /// Camera at `position` looking at `look_at` with +Y up.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            up: Vec3::Y,
        }
    }
}

/// How the mirror-reflected color combines with the local color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionBlend {
    /// `local + reflected * reflectivity`
    #[default]
    Additive,
    /// `local * (1 - reflectivity) + reflected * reflectivity`
    Lerp,
}

/// Image and transport settings for one render pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Recursion budget for reflected and refracted rays
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Color returned when a ray hits nothing
    #[serde(default)]
    pub background: Color,

    #[serde(default)]
    pub reflection_blend: ReflectionBlend,

    /// Phong exponent; `None` disables the specular term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specular_exponent: Option<f32>,

    /// Offset along the normal for secondary ray origins
    #[serde(default = "default_surface_bias")]
    pub surface_bias: f32,
}

/// Largest frame `validate` accepts, in pixels (16384 x 16384).
pub const MAX_PIXELS: u64 = 1 << 28;

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    1000
}

fn default_max_depth() -> u32 {
    5
}

fn default_surface_bias() -> f32 {
    1e-4
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_depth: default_max_depth(),
            background: Color::ZERO,
            reflection_blend: ReflectionBlend::default(),
            specular_exponent: None,
            surface_bias: default_surface_bias(),
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the recursion budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::Invalid(format!(
                "image size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_PIXELS {
            return Err(SceneError::Invalid(format!(
                "image size {}x{} exceeds {} pixels",
                self.width, self.height, MAX_PIXELS
            )));
        }
        if !(self.surface_bias >= 0.0) {
            return Err(SceneError::Invalid(format!(
                "surface bias {} must be non-negative",
                self.surface_bias
            )));
        }
        Ok(())
    }
}

/// A scene together with the camera and settings to render it.
///
/// This is the JSON document `prism render --scene` reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: Scene,
    pub camera: CameraSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

impl SceneFile {
    /// Parse and validate a scene file from a JSON string.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let file: SceneFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Load and validate a scene file from disk.
    ///
    /// An unnamed scene takes the file stem as its name.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut file: SceneFile = serde_json::from_reader(reader)?;

        if file.scene.name.is_empty() {
            if let Some(stem) = path.file_stem() {
                file.scene.name = stem.to_string_lossy().into_owned();
            }
        }

        file.validate()?;
        log::debug!(
            "Loaded scene '{}' from {}: {} primitives, {} lights",
            file.scene.name,
            path.display(),
            file.scene.primitive_count(),
            file.scene.light_count()
        );
        Ok(file)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene file to disk as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn validate(&self) -> SceneResult<()> {
        self.scene.validate()?;
        self.render.validate()
    }
}
