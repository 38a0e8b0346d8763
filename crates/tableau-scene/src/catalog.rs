//! Mesh catalog: one generated mesh per primitive
//!
//! Generation runs once at startup. A construction error makes the whole
//! catalog fail, since the scene cannot render with a mesh missing; the
//! caller decides whether to abort or substitute.

use serde::{Deserialize, Serialize};
use tableau_geometry::{generate_mesh, GeometryError, Mesh, Primitive};

/// Tag for one solid in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Plane,
    Cube,
    Prism,
    Pyramid,
    Cylinder,
    TaperedCylinder,
    Sphere,
    Torus,
}

impl PrimitiveKind {
    /// Every catalog entry, in generation order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Plane,
        PrimitiveKind::Cube,
        PrimitiveKind::Prism,
        PrimitiveKind::Pyramid,
        PrimitiveKind::Cylinder,
        PrimitiveKind::TaperedCylinder,
        PrimitiveKind::Sphere,
        PrimitiveKind::Torus,
    ];

    /// Fixed shape parameters for this catalog entry.
    ///
    /// These are constants of the demo, not a configuration surface;
    /// scene records size the solids through their transforms instead.
    pub fn parameters(self) -> Primitive {
        match self {
            PrimitiveKind::Plane => Primitive::Plane {
                width: 2.0,
                depth: 2.0,
            },
            PrimitiveKind::Cube => Primitive::Cube {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            PrimitiveKind::Prism => Primitive::Prism {
                sides: 3,
                radius: 0.5,
                height: 1.0,
            },
            PrimitiveKind::Pyramid => Primitive::Pyramid {
                sides: 4,
                radius: 0.5,
                height: 1.0,
            },
            PrimitiveKind::Cylinder => Primitive::Cylinder {
                segments: 36,
                radius: 0.5,
                height: 1.0,
            },
            PrimitiveKind::TaperedCylinder => Primitive::TaperedCylinder {
                segments: 36,
                bottom_radius: 0.5,
                top_radius: 0.25,
                height: 1.0,
            },
            PrimitiveKind::Sphere => Primitive::Sphere {
                segments: 36,
                rings: 18,
                radius: 0.5,
            },
            PrimitiveKind::Torus => Primitive::Torus {
                major_segments: 36,
                minor_segments: 18,
                major_radius: 0.5,
                minor_radius: 0.15,
            },
        }
    }
}

/// The generated meshes for the whole catalog
#[derive(Debug, Clone)]
pub struct MeshCatalog {
    plane: Mesh,
    cube: Mesh,
    prism: Mesh,
    pyramid: Mesh,
    cylinder: Mesh,
    tapered_cylinder: Mesh,
    sphere: Mesh,
    torus: Mesh,
}

impl MeshCatalog {
    /// Generate every catalog mesh.
    ///
    /// Fails on the first construction error; no partial catalog is
    /// returned.
    pub fn generate() -> Result<Self, GeometryError> {
        let build = |kind: PrimitiveKind| -> Result<Mesh, GeometryError> {
            let mesh = generate_mesh(&kind.parameters())?;
            tracing::debug!(
                "generated {:?}: {} vertices, {} indices",
                kind,
                mesh.vertex_count(),
                mesh.index_count()
            );
            Ok(mesh)
        };
        let catalog = Self {
            plane: build(PrimitiveKind::Plane)?,
            cube: build(PrimitiveKind::Cube)?,
            prism: build(PrimitiveKind::Prism)?,
            pyramid: build(PrimitiveKind::Pyramid)?,
            cylinder: build(PrimitiveKind::Cylinder)?,
            tapered_cylinder: build(PrimitiveKind::TaperedCylinder)?,
            sphere: build(PrimitiveKind::Sphere)?,
            torus: build(PrimitiveKind::Torus)?,
        };
        tracing::info!("mesh catalog ready ({} primitives)", PrimitiveKind::ALL.len());
        Ok(catalog)
    }

    /// Look up the mesh for a catalog entry
    pub fn get(&self, kind: PrimitiveKind) -> &Mesh {
        match kind {
            PrimitiveKind::Plane => &self.plane,
            PrimitiveKind::Cube => &self.cube,
            PrimitiveKind::Prism => &self.prism,
            PrimitiveKind::Pyramid => &self.pyramid,
            PrimitiveKind::Cylinder => &self.cylinder,
            PrimitiveKind::TaperedCylinder => &self.tapered_cylinder,
            PrimitiveKind::Sphere => &self.sphere,
            PrimitiveKind::Torus => &self.torus,
        }
    }

    /// Iterate every catalog entry with its mesh, for device upload
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveKind, &Mesh)> {
        PrimitiveKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
