//! Generated mesh data and draw metadata

use crate::vertex::Vertex;

/// Draw shape of a generated mesh.
///
/// The renderer dispatches on this tag to pick the draw call shape; no
/// per-primitive special-casing is needed on its side.
#[derive(Clone, Debug, PartialEq)]
pub enum Topology {
    /// Indexed triangle list
    Indexed { indices: Vec<u32> },
    /// Non-indexed triangle list
    TriangleList,
    /// Non-indexed triangle strip (degenerate triangles may bridge sections)
    TriangleStrip,
}

/// A generated solid's renderable representation.
///
/// Constructed once at startup by the generator and immutable thereafter;
/// the owner uploads the buffers to the device and releases them on
/// teardown.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    topology: Topology,
}

impl Mesh {
    pub(crate) fn indexed(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            topology: Topology::Indexed { indices },
        }
    }

    pub(crate) fn list(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            topology: Topology::TriangleList,
        }
    }

    pub(crate) fn strip(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            topology: Topology::TriangleStrip,
        }
    }

    /// The interleaved vertex records
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The draw shape tag
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of indices (0 for non-indexed meshes)
    pub fn index_count(&self) -> u32 {
        match &self.topology {
            Topology::Indexed { indices } => indices.len() as u32,
            _ => 0,
        }
    }

    /// Whether the mesh is drawn with an index buffer
    pub fn is_indexed(&self) -> bool {
        matches!(self.topology, Topology::Indexed { .. })
    }

    /// The index buffer, if the mesh is indexed
    pub fn indices(&self) -> Option<&[u32]> {
        match &self.topology {
            Topology::Indexed { indices } => Some(indices),
            _ => None,
        }
    }

    /// Vertex buffer as raw bytes for device upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for device upload, if indexed
    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices().map(bytemuck::cast_slice)
    }

    /// Resolve the mesh into triangles as vertex-index triples.
    ///
    /// Strip parity is already applied: each returned triple is in
    /// counter-clockwise order seen from outside the solid. Degenerate
    /// triangles bridging strip sections are skipped.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        match &self.topology {
            Topology::Indexed { indices } => indices
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
                .collect(),
            Topology::TriangleList => (0..self.vertices.len() as u32 / 3)
                .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
                .collect(),
            Topology::TriangleStrip => {
                let mut triangles = Vec::new();
                for i in 0..self.vertices.len().saturating_sub(2) {
                    // Odd strip triangles flip their first two vertices to
                    // keep a consistent facing.
                    let [a, b, c] = if i % 2 == 0 {
                        [i, i + 1, i + 2]
                    } else {
                        [i + 1, i, i + 2]
                    };
                    let (pa, pb, pc) = (
                        self.vertices[a].position,
                        self.vertices[b].position,
                        self.vertices[c].position,
                    );
                    if pa == pb || pb == pc || pa == pc {
                        continue;
                    }
                    triangles.push([a as u32, b as u32, c as u32]);
                }
                triangles
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32) -> Vertex {
        Vertex::new([x, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0])
    }

    #[test]
    fn test_index_count_zero_for_non_indexed() {
        let mesh = Mesh::list(vec![v(0.0), v(1.0), v(2.0)]);
        assert_eq!(mesh.index_count(), 0);
        assert!(!mesh.is_indexed());
        assert!(mesh.index_bytes().is_none());
    }

    #[test]
    fn test_strip_triangles_skip_degenerates() {
        // Two strip sections bridged by repeated vertices.
        let verts = vec![v(0.0), v(1.0), v(2.0), v(2.0), v(3.0), v(3.0), v(4.0), v(5.0)];
        let mesh = Mesh::strip(verts);
        let tris = mesh.triangles();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0], [0, 1, 2]);
        assert_eq!(tris[1], [6, 5, 7]);
    }

    #[test]
    fn test_vertex_bytes_stride() {
        let mesh = Mesh::list(vec![v(0.0), v(1.0), v(2.0)]);
        assert_eq!(mesh.vertex_bytes().len(), 3 * Vertex::STRIDE);
    }
}
