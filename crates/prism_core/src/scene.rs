//! Scene description types for Prism.
//!
//! A scene is plain data: flat, ordered lists of spheres, planes, cubes and
//! point lights. Nothing here knows how to intersect a ray; the renderer
//! crate provides that. The scene is never mutated while a frame renders.

use prism_math::{Aabb, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Color type alias (RGB, nominally 0-1 but never clamped)
pub type Color = Vec3;

fn default_refractive_index() -> f32 {
    1.0
}

/// Optical properties shared by every primitive.
///
/// `reflectivity` and `transmissivity` are independent weights; their sum
/// is deliberately not normalized, so a surface may return more light than
/// it receives.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Base (diffuse) color
    pub color: Color,

    /// Weight of the mirror-reflected contribution (0-1)
    #[serde(default)]
    pub reflectivity: f32,

    /// Weight of the refracted contribution (0-1)
    #[serde(default)]
    pub transmissivity: f32,

    /// Index of refraction (1.0 = air, 1.5 = glass)
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
}

impl Surface {
    /// An opaque, non-reflective surface of the given color.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            reflectivity: 0.0,
            transmissivity: 0.0,
            refractive_index: 1.0,
        }
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set transmissivity and index of refraction.
    pub fn with_transmission(mut self, transmissivity: f32, refractive_index: f32) -> Self {
        self.transmissivity = transmissivity;
        self.refractive_index = refractive_index;
        self
    }

    fn validate(&self, what: &str) -> SceneResult<()> {
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(SceneError::Invalid(format!(
                "{what}: reflectivity {} outside [0, 1]",
                self.reflectivity
            )));
        }
        if !(0.0..=1.0).contains(&self.transmissivity) {
            return Err(SceneError::Invalid(format!(
                "{what}: transmissivity {} outside [0, 1]",
                self.transmissivity
            )));
        }
        if !(self.refractive_index > 0.0) {
            return Err(SceneError::Invalid(format!(
                "{what}: refractive index {} must be positive",
                self.refractive_index
            )));
        }
        if self.reflectivity + self.transmissivity > 1.0 {
            log::warn!(
                "{what}: reflectivity + transmissivity = {} exceeds 1, surface will gain energy",
                self.reflectivity + self.transmissivity
            );
        }
        Ok(())
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }
}

/// An infinite plane through `point`, facing `normal`.
///
/// Planes are always opaque.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaneRecord", into = "PlaneRecord")]
pub struct Plane {
    pub point: Vec3,
    /// Unit normal (normalized at construction)
    pub normal: Vec3,
    pub color: Color,
    pub reflectivity: f32,
}

impl Plane {
    /// Create a new plane. The normal is normalized; a zero normal yields
    /// NaN components, which `Scene::validate` rejects.
    pub fn new(point: Vec3, normal: Vec3, color: Color, reflectivity: f32) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            color,
            reflectivity,
        }
    }

    /// The plane's optical properties as a full surface record.
    pub fn surface(&self) -> Surface {
        Surface::diffuse(self.color).with_reflectivity(self.reflectivity)
    }
}

/// On-disk form of a plane; deserializing goes through `Plane::new`.
#[derive(Serialize, Deserialize)]
struct PlaneRecord {
    point: Vec3,
    normal: Vec3,
    color: Color,
    #[serde(default)]
    reflectivity: f32,
}

impl From<PlaneRecord> for Plane {
    fn from(r: PlaneRecord) -> Self {
        Plane::new(r.point, r.normal, r.color, r.reflectivity)
    }
}

impl From<Plane> for PlaneRecord {
    fn from(p: Plane) -> Self {
        Self {
            point: p.point,
            normal: p.normal,
            color: p.color,
            reflectivity: p.reflectivity,
        }
    }
}

/// An axis-aligned box between two opposite corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub min: Vec3,
    pub max: Vec3,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Cube {
    /// Create a new cube. `min` must be below `max` on every axis.
    pub fn new(min: Vec3, max: Vec3, surface: Surface) -> Self {
        Self { min, max, surface }
    }

    /// The cube's extent as a bounding box.
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.min, self.max)
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    /// RGB scale factor, unbounded
    pub intensity: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A complete scene: every primitive and light, in scan order.
///
/// Order matters: when two primitives are hit at the same distance, the
/// one scanned first wins, and spheres are scanned before planes before
/// cubes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (preset name or file stem)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub planes: Vec<Plane>,

    #[serde(default)]
    pub cubes: Vec<Cube>,

    #[serde(default)]
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a plane and return its index.
    pub fn add_plane(&mut self, plane: Plane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    /// Add a cube and return its index.
    pub fn add_cube(&mut self, cube: Cube) -> usize {
        self.cubes.push(cube);
        self.cubes.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Total number of primitives of all kinds.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.cubes.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check geometric and material invariants.
    ///
    /// The renderer never calls this: a malformed scene still renders, it
    /// just produces NaN-tainted or degenerate pixels.
    pub fn validate(&self) -> SceneResult<()> {
        for (i, sphere) in self.spheres.iter().enumerate() {
            let what = format!("sphere {i}");
            if !(sphere.radius > 0.0) || !sphere.radius.is_finite() {
                return Err(SceneError::Invalid(format!(
                    "{what}: radius {} must be positive",
                    sphere.radius
                )));
            }
            sphere.surface.validate(&what)?;
        }

        for (i, plane) in self.planes.iter().enumerate() {
            let what = format!("plane {i}");
            if !plane.normal.is_finite() {
                return Err(SceneError::Invalid(format!("{what}: zero-length normal")));
            }
            plane.surface().validate(&what)?;
        }

        for (i, cube) in self.cubes.iter().enumerate() {
            let what = format!("cube {i}");
            if !cube.bounds().is_well_formed() {
                return Err(SceneError::Invalid(format!(
                    "{what}: min {} must be below max {} on every axis",
                    cube.min, cube.max
                )));
            }
            cube.surface.validate(&what)?;
        }

        if self.lights.is_empty() {
            log::warn!("scene '{}' has no lights, every surface will be black", self.name);
        }

        Ok(())
    }
}
