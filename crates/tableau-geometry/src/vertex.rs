//! Vertex type for generated meshes

use bytemuck::{Pod, Zeroable};

/// Interleaved vertex record: position, normal, texture coordinate.
///
/// `#[repr(C)]` + `Pod` so a whole vertex buffer can be uploaded to the
/// device as one byte slice.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Byte offset of the normal attribute within a vertex record
    pub const NORMAL_OFFSET: usize = 12;

    /// Byte offset of the texture coordinate attribute within a vertex record
    pub const UV_OFFSET: usize = 24;

    /// Stride of one vertex record in bytes
    pub const STRIDE: usize = std::mem::size_of::<Self>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 32);
        let v = Vertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.5]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), Vertex::STRIDE);
    }
}
