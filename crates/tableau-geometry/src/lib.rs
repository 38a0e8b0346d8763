//! Tableau Geometry - procedural primitive mesh generation
//!
//! Synthesizes interleaved vertex and index buffers for a fixed catalog of
//! solids (plane, cube, prism, pyramid, cylinder, tapered cylinder, sphere,
//! torus). Generation is deterministic and runs once at startup; the
//! resulting [`Mesh`] buffers are handed to the renderer for device upload.
//!
//! All generated meshes satisfy the same contract: unit-length normals,
//! counter-clockwise winding seen from outside the solid, and (for indexed
//! meshes) every index in range with no orphan vertices.

pub mod error;
pub mod mesh;
pub mod primitives;
pub mod vertex;

pub use error::GeometryError;
pub use mesh::{Mesh, Topology};
pub use primitives::{generate_mesh, Primitive};
pub use vertex::Vertex;
