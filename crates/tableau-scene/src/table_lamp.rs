//! The table and desk lamp demo scene
//!
//! Every part of the lamp is a record over a catalog mesh; the renderer
//! walks the list generically instead of issuing hand-written draw
//! sequences per part.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use tableau_core::{Color, Transform};

use crate::catalog::PrimitiveKind;
use crate::scene::{CameraPose, Lighting, PointLight, Scene, SceneObject, TextureSlot};

fn part(
    name: &str,
    mesh: PrimitiveKind,
    texture: TextureSlot,
    scale: Vec3,
    rotation: Quat,
    translation: Vec3,
) -> SceneObject {
    SceneObject {
        name: name.to_owned(),
        mesh,
        transform: Transform::from_scale_rotation_translation(scale, rotation, translation),
        texture,
        uv_scale: Vec2::ONE,
    }
}

fn metal(name: &str, scale: Vec3, rotation: Quat, translation: Vec3) -> SceneObject {
    part(name, PrimitiveKind::Cube, TextureSlot::Metal, scale, rotation, translation)
}

/// Build the table and desk lamp scene.
///
/// The lamp body is a stack of metal parts on a wooden table top: a
/// layered base, an open box frame of rails and posts, a crown, a hosel,
/// and a bulb under a tapered shade. Two small pyramids mark the point
/// light positions for debugging the lighting rig.
pub fn table_lamp_scene() -> Scene {
    let upright = Quat::IDENTITY;
    let quarter_turn = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);

    let mut objects = vec![part(
        "table top",
        PrimitiveKind::Plane,
        TextureSlot::Wood,
        Vec3::new(2.0, 1.0, 1.0),
        upright,
        Vec3::new(0.0, 0.0, -1.0),
    )];

    // Layered lamp base.
    objects.push(metal(
        "base bottom",
        Vec3::new(0.55, 0.07, 0.55),
        upright,
        Vec3::new(0.0, 0.03, -1.0),
    ));
    objects.push(metal(
        "base ring",
        Vec3::new(0.51, 0.016, 0.51),
        upright,
        Vec3::new(0.0, 0.07, -1.0),
    ));
    objects.push(metal(
        "base upper",
        Vec3::new(0.49, 0.06, 0.49),
        upright,
        Vec3::new(0.0, 0.105, -1.0),
    ));

    // Box frame, bottom rails.
    let rail = Vec3::new(0.451, 0.07, 0.005);
    let cross_rail = Vec3::new(0.4645, 0.07, 0.005);
    objects.push(metal("bottom rail front", rail, upright, Vec3::new(0.0, 0.17, -0.770)));
    objects.push(metal("bottom rail back", rail, upright, Vec3::new(0.0, 0.17, -1.228)));
    objects.push(metal(
        "bottom rail right",
        cross_rail,
        quarter_turn,
        Vec3::new(0.228, 0.17, -1.0),
    ));
    objects.push(metal(
        "bottom rail left",
        cross_rail,
        quarter_turn,
        Vec3::new(-0.228, 0.17, -1.0),
    ));

    // Box frame, corner posts.
    let post = Vec3::new(0.07, 0.5, 0.005);
    objects.push(metal("post front left", post, upright, Vec3::new(-0.194, 0.44, -0.770)));
    objects.push(metal("post front right", post, upright, Vec3::new(0.19, 0.44, -0.770)));
    objects.push(metal("post back left", post, upright, Vec3::new(-0.194, 0.44, -1.228)));
    objects.push(metal("post back right", post, upright, Vec3::new(0.19, 0.44, -1.228)));
    objects.push(metal(
        "post left front",
        post,
        quarter_turn,
        Vec3::new(-0.2285, 0.44, -0.803),
    ));
    objects.push(metal(
        "post left back",
        post,
        quarter_turn,
        Vec3::new(-0.2285, 0.44, -1.195),
    ));
    objects.push(metal(
        "post right front",
        post,
        quarter_turn,
        Vec3::new(0.228, 0.44, -0.803),
    ));
    objects.push(metal(
        "post right back",
        post,
        quarter_turn,
        Vec3::new(0.228, 0.44, -1.195),
    ));

    // Box frame, top rails and cap.
    objects.push(metal("top rail front", rail, upright, Vec3::new(0.0, 0.725, -0.770)));
    objects.push(metal("top rail back", rail, upright, Vec3::new(0.0, 0.725, -1.228)));
    objects.push(metal(
        "top rail right",
        cross_rail,
        quarter_turn,
        Vec3::new(0.228, 0.725, -1.0),
    ));
    objects.push(metal(
        "top rail left",
        cross_rail,
        quarter_turn,
        Vec3::new(-0.228, 0.725, -1.0),
    ));
    objects.push(metal(
        "base cap",
        Vec3::new(0.55, 0.07, 0.55),
        upright,
        Vec3::new(0.0, 0.725, -1.0),
    ));

    // Crown, neck, hosel.
    objects.push(part(
        "base crown",
        PrimitiveKind::Pyramid,
        TextureSlot::Metal,
        Vec3::new(0.55, 0.2, 0.55),
        upright,
        Vec3::new(0.0, 0.860, -1.0),
    ));
    objects.push(metal(
        "neck lower",
        Vec3::new(0.3, 0.15, 0.3),
        upright,
        Vec3::new(0.0, 0.840, -1.0),
    ));
    objects.push(metal(
        "neck upper",
        Vec3::new(0.25, 0.20, 0.25),
        upright,
        Vec3::new(0.0, 0.880, -1.0),
    ));
    objects.push(part(
        "hosel",
        PrimitiveKind::Cylinder,
        TextureSlot::Metal,
        Vec3::new(0.03, 0.3, 0.03),
        upright,
        Vec3::new(0.0, 0.900, -1.0),
    ));

    // Bulb and shade.
    objects.push(part(
        "light bulb",
        PrimitiveKind::Sphere,
        TextureSlot::Bulb,
        Vec3::new(0.07, 0.08, 0.07),
        upright,
        Vec3::new(0.0, 1.18, -1.0),
    ));
    objects.push(part(
        "lamp shade",
        PrimitiveKind::TaperedCylinder,
        TextureSlot::Shade,
        Vec3::new(0.4, 0.5, 0.4),
        upright,
        Vec3::new(0.0, 1.18, -1.0),
    ));

    // Small markers at the point light positions.
    let marker_tilt = Quat::from_axis_angle(Vec3::X, -0.2);
    objects.push(part(
        "light marker left",
        PrimitiveKind::Pyramid,
        TextureSlot::Metal,
        Vec3::splat(0.3),
        marker_tilt,
        Vec3::new(-1.0, 6.0, 0.7),
    ));
    objects.push(part(
        "light marker right",
        PrimitiveKind::Pyramid,
        TextureSlot::Metal,
        Vec3::splat(0.3),
        marker_tilt,
        Vec3::new(1.0, 6.0, 0.7),
    ));

    Scene {
        objects,
        lighting: Lighting {
            ambient_color: Color::rgb(0.3, 0.3, 0.3),
            ambient_strength: 0.2,
            specular_intensity: 1.0,
            highlight_size: 16.0,
            lights: vec![
                PointLight {
                    position: Vec3::new(-2.0, 4.0, -0.5),
                    color: Color::rgb(0.4, 0.4, 0.4),
                },
                PointLight {
                    position: Vec3::new(2.0, 4.0, -0.5),
                    color: Color::rgb(0.4, 0.4, 0.4),
                },
            ],
        },
        background: Color::rgb(0.4, 0.4, 0.4),
        camera: CameraPose {
            position: Vec3::new(0.0, 2.0, 2.0),
            front: Vec3::new(0.0, -1.0, -2.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MeshCatalog;

    #[test]
    fn test_scene_object_inventory() {
        let scene = table_lamp_scene();
        assert_eq!(scene.objects.len(), 29);

        let cubes = scene
            .objects
            .iter()
            .filter(|o| o.mesh == PrimitiveKind::Cube)
            .count();
        assert_eq!(cubes, 22);

        let wood = scene
            .objects
            .iter()
            .filter(|o| o.texture == TextureSlot::Wood)
            .count();
        assert_eq!(wood, 1);
    }

    #[test]
    fn test_scene_only_references_catalog_meshes() {
        let catalog = MeshCatalog::generate().expect("catalog should build");
        let scene = table_lamp_scene();
        for kind in scene.used_meshes() {
            assert!(catalog.get(kind).vertex_count() > 0);
        }
    }

    #[test]
    fn test_unused_catalog_entries() {
        // The demo never places the prism or torus, but they stay in the
        // catalog for parity with the generator's coverage.
        let used = table_lamp_scene().used_meshes();
        assert!(!used.contains(&PrimitiveKind::Prism));
        assert!(!used.contains(&PrimitiveKind::Torus));
        assert_eq!(used.len(), 6);
    }

    #[test]
    fn test_lighting_rig() {
        let scene = table_lamp_scene();
        assert_eq!(scene.lighting.lights.len(), 2);
        assert_eq!(scene.lighting.lights[0].position, Vec3::new(-2.0, 4.0, -0.5));
        assert_eq!(scene.lighting.ambient_strength, 0.2);
        assert_eq!(scene.lighting.highlight_size, 16.0);
    }

    #[test]
    fn test_scene_round_trips_through_json() {
        let scene = table_lamp_scene();
        let json = serde_json::to_string(&scene).expect("serialize");
        let back: crate::scene::Scene = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.objects.len(), scene.objects.len());
        assert_eq!(back.camera.position, scene.camera.position);
        assert_eq!(back.objects[0].name, "table top");
    }
}
