//! Geometry uploaded to the GPU

use wgpu::util::DeviceExt;

use crate::gfx::geometry::GeometryData;

/// Vertex buffer plus two index buffers: triangles for the filled pass and
/// unique edges for the wireframe pass
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    triangle_buffer: wgpu::Buffer,
    triangle_count: u32,
    edge_buffer: wgpu::Buffer,
    edge_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, data: &GeometryData, label: &str) -> Self {
        let (vertices, indices) = data.to_scene_format();
        let edges = data.edge_indices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertices")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let triangle_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Triangles")),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let edge_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Edges")),
            contents: bytemuck::cast_slice(&edges),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            triangle_buffer,
            triangle_count: indices.len() as u32,
            edge_buffer,
            edge_count: edges.len() as u32,
        }
    }
}

/// Extension trait for RenderPass to draw a [`GpuMesh`]
pub trait DrawMesh {
    /// Draws `mesh` as triangles, or as edge lines when `wireframe` is set
    fn draw_mesh(&mut self, mesh: &GpuMesh, wireframe: bool);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &GpuMesh, wireframe: bool) {
        let (indices, count) = if wireframe {
            (&mesh.edge_buffer, mesh.edge_count)
        } else {
            (&mesh.triangle_buffer, mesh.triangle_count)
        };
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..count, 0, 0..1);
    }
}
