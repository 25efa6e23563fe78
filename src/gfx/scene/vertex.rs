//! # Vertex Data Structures
//!
//! GPU-compatible vertex format shared by the filled and wireframe pipelines.

use std::mem;

/// Position and normal of one mesh vertex
///
/// `#[repr(C)]` keeps the field layout identical to the `VertexInput` struct
/// in `basic.wgsl`.
///
/// ```
/// use compound_viewer::gfx::geometry::generate_octahedron;
///
/// let (vertices, _) = generate_octahedron(1.0).to_scene_format();
/// assert_eq!(vertices[2].position, [0.0, 1.0, 0.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    /// Unit normal; only the filled pass reads it
    pub normal: [f32; 3],
}

impl Vertex3D {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Buffer layout: position at location 0, normal at location 1
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex3D::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
