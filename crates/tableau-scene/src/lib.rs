//! Tableau Scene - scene description for the table and desk lamp demo
//!
//! The scene is plain data: a catalog of generated primitive meshes, a list
//! of object records (mesh tag, transform, texture tag, UV scale), the
//! Phong lighting rig, and the starting camera pose. The renderer iterates
//! the records generically; there are no per-object draw sequences here and
//! no GPU dependency.

pub mod catalog;
pub mod scene;
pub mod table_lamp;

pub use catalog::{MeshCatalog, PrimitiveKind};
pub use scene::{CameraPose, Lighting, PointLight, Scene, SceneObject, TextureSlot};
pub use table_lamp::table_lamp_scene;
