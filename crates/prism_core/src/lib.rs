//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Plane`, `Cube`, `Light`, `Surface`
//! - **Settings**: `CameraSettings`, `RenderSettings`, `ReflectionBlend`
//! - **Scene files**: JSON loading and saving through `SceneFile`
//! - **Presets**: built-in scenes addressable by name
//!
//! # Example
//!
//! ```ignore
//! use prism_core::SceneFile;
//!
//! let file = SceneFile::load("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     file.scene.primitive_count(),
//!     file.scene.light_count());
//! ```

pub mod error;
pub mod presets;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use presets::{preset, PRESET_NAMES};
pub use scene::{Color, Cube, Light, Plane, Scene, Sphere, Surface};
pub use settings::{CameraSettings, ReflectionBlend, RenderSettings, SceneFile};
