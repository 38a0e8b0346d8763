//! Scene records: objects, lighting, and the starting camera pose

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tableau_core::{Color, Transform};

use crate::catalog::PrimitiveKind;

/// Texture image slot referenced by scene objects.
///
/// Image loading and upload belong to the application shell; the scene
/// only tags which slot an object samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureSlot {
    Wood,
    Metal,
    Bulb,
    Shade,
}

/// One drawable object: a catalog mesh placed in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Human-readable part name
    pub name: String,
    /// Which catalog mesh this object draws
    pub mesh: PrimitiveKind,
    /// Scale, rotation, translation applied in that order
    pub transform: Transform,
    /// Texture sampled by the surface shader
    pub texture: TextureSlot,
    /// UV multiplier for tiled textures
    pub uv_scale: Vec2,
}

/// A point light feeding the Phong surface shader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

/// The scene's fixed lighting rig
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lighting {
    pub ambient_color: Color,
    pub ambient_strength: f32,
    pub specular_intensity: f32,
    pub highlight_size: f32,
    pub lights: Vec<PointLight>,
}

/// Starting camera placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    /// Direction the camera initially looks along (not necessarily unit)
    pub front: Vec3,
}

/// A complete renderable scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lighting: Lighting,
    pub background: Color,
    pub camera: CameraPose,
}

impl Scene {
    /// Catalog entries actually referenced by this scene's objects
    pub fn used_meshes(&self) -> Vec<PrimitiveKind> {
        let mut kinds: Vec<PrimitiveKind> = Vec::new();
        for object in &self.objects {
            if !kinds.contains(&object.mesh) {
                kinds.push(object.mesh);
            }
        }
        kinds
    }
}
