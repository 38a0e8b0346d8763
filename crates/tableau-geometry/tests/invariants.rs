//! Cross-primitive invariants: every generated solid satisfies the same
//! contract regardless of its draw shape.

use glam::Vec3;
use tableau_geometry::{generate_mesh, GeometryError, Mesh, Primitive};

fn catalog() -> Vec<(&'static str, Primitive)> {
    vec![
        ("plane", Primitive::Plane { width: 2.0, depth: 2.0 }),
        (
            "cube",
            Primitive::Cube {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
        ),
        (
            "prism",
            Primitive::Prism {
                sides: 3,
                radius: 0.5,
                height: 1.0,
            },
        ),
        (
            "pyramid",
            Primitive::Pyramid {
                sides: 4,
                radius: 0.5,
                height: 1.0,
            },
        ),
        (
            "cylinder",
            Primitive::Cylinder {
                segments: 36,
                radius: 0.5,
                height: 1.0,
            },
        ),
        (
            "tapered cylinder",
            Primitive::TaperedCylinder {
                segments: 36,
                bottom_radius: 0.5,
                top_radius: 0.25,
                height: 1.0,
            },
        ),
        (
            "sphere",
            Primitive::Sphere {
                segments: 36,
                rings: 18,
                radius: 0.5,
            },
        ),
        (
            "torus",
            Primitive::Torus {
                major_segments: 36,
                minor_segments: 18,
                major_radius: 0.5,
                minor_radius: 0.15,
            },
        ),
    ]
}

fn build(name: &str, primitive: &Primitive) -> Mesh {
    generate_mesh(primitive).unwrap_or_else(|e| panic!("{name}: {e}"))
}

#[test]
fn normals_are_unit_length() {
    for (name, primitive) in catalog() {
        let mesh = build(name, &primitive);
        for (i, vertex) in mesh.vertices().iter().enumerate() {
            let len = Vec3::from_array(vertex.normal).length();
            assert!(
                (len - 1.0).abs() < 1e-4,
                "{name}: vertex {i} normal length {len}"
            );
        }
    }
}

#[test]
fn indices_are_in_range() {
    for (name, primitive) in catalog() {
        let mesh = build(name, &primitive);
        if let Some(indices) = mesh.indices() {
            for &index in indices {
                assert!(
                    index < mesh.vertex_count(),
                    "{name}: index {index} out of range"
                );
            }
        }
    }
}

#[test]
fn indexed_meshes_have_no_orphan_vertices() {
    for (name, primitive) in catalog() {
        let mesh = build(name, &primitive);
        let Some(indices) = mesh.indices() else {
            continue;
        };
        let mut referenced = vec![false; mesh.vertex_count() as usize];
        for &index in indices {
            referenced[index as usize] = true;
        }
        for (i, seen) in referenced.iter().enumerate() {
            assert!(*seen, "{name}: vertex {i} never referenced");
        }
    }
}

#[test]
fn triangles_wind_counter_clockwise() {
    // The face normal of every resolved triangle must agree with the
    // average of its vertex normals; a flipped triangle would point the
    // other way.
    for (name, primitive) in catalog() {
        let mesh = build(name, &primitive);
        let vertices = mesh.vertices();
        for (t, [a, b, c]) in mesh.triangles().into_iter().enumerate() {
            let p0 = Vec3::from_array(vertices[a as usize].position);
            let p1 = Vec3::from_array(vertices[b as usize].position);
            let p2 = Vec3::from_array(vertices[c as usize].position);
            let face = (p1 - p0).cross(p2 - p0);
            let outward = Vec3::from_array(vertices[a as usize].normal)
                + Vec3::from_array(vertices[b as usize].normal)
                + Vec3::from_array(vertices[c as usize].normal);
            assert!(
                face.dot(outward) > 0.0,
                "{name}: triangle {t} winds clockwise"
            );
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for (name, primitive) in catalog() {
        let a = build(name, &primitive);
        let b = build(name, &primitive);
        assert_eq!(a.vertex_bytes(), b.vertex_bytes(), "{name}: vertex bytes");
        assert_eq!(a.index_bytes(), b.index_bytes(), "{name}: index bytes");
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let too_few = generate_mesh(&Primitive::Cylinder {
        segments: 2,
        radius: 0.5,
        height: 1.0,
    });
    assert!(matches!(
        too_few,
        Err(GeometryError::TooFewSubdivisions { .. })
    ));

    let flat = generate_mesh(&Primitive::Sphere {
        segments: 36,
        rings: 18,
        radius: 0.0,
    });
    assert!(matches!(
        flat,
        Err(GeometryError::NonPositiveDimension { .. })
    ));

    // Minimum subdivisions are accepted.
    let triangle_tube = generate_mesh(&Primitive::Cylinder {
        segments: 3,
        radius: 0.5,
        height: 1.0,
    });
    assert!(triangle_tube.is_ok());
}
