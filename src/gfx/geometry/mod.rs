//! # Procedural Geometry Generation
//!
//! Every mesh the viewer draws is generated here; there are no model files.
//!
//! ## Supported Primitives
//!
//! - **Box**: subdivided box, one grid per face
//! - **Sphere**: UV sphere
//! - **Cylinder / Cone**: Y-axis aligned, capped; a cone is a cylinder with a zero top radius
//! - **Torus**: ring in the XY plane
//! - **Tube**: circular sweep along any [`Curve`]
//! - **Octahedron**: the six-vertex regular solid
//!
//! ## Usage
//!
//! ```rust
//! use compound_viewer::gfx::geometry::{generate_box, generate_tube, SineCurve};
//!
//! let cube = generate_box(50.0, 50.0, 50.0, 4, 4, 4);
//! assert_eq!(cube.triangle_count(), 6 * 16 * 2);
//!
//! let tube = generate_tube(&SineCurve::new(10.0), 20, 1.0, 8);
//! assert_eq!(tube.vertex_count(), 21 * 9);
//! ```

pub mod curve;
pub mod primitives;

pub use curve::{Curve, SineCurve};
pub use primitives::*;

use std::collections::HashSet;

use crate::gfx::scene::vertex::Vertex3D;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends a vertex and returns its index
    pub(crate) fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        self.vertices.push(position);
        self.normals.push(normal);
        (self.vertices.len() - 1) as u32
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Line-list indices covering every triangle edge exactly once
    ///
    /// Edges shared by two triangles are emitted once, in first-seen order.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();

        for triangle in self.indices.chunks_exact(3) {
            for (a, b) in [
                (triangle[0], triangle[1]),
                (triangle[1], triangle[2]),
                (triangle[2], triangle[0]),
            ] {
                if seen.insert((a.min(b), a.max(b))) {
                    edges.push(a);
                    edges.push(b);
                }
            }
        }

        edges
    }

    /// Interleaves positions and normals into the renderer's vertex format
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex3D {
                position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_edges_emitted_once() {
        // Two triangles sharing the 0-2 diagonal
        let quad = GeometryData {
            vertices: vec![[0.0; 3]; 4],
            normals: vec![[0.0, 0.0, 1.0]; 4],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        let edges = quad.edge_indices();
        assert_eq!(edges.len(), 5 * 2);
        assert_eq!(edges, vec![0, 1, 1, 2, 2, 0, 2, 3, 3, 0]);
    }

    #[test]
    fn test_scene_format_pairs_normals() {
        let data = generate_octahedron(2.0);
        let (vertices, indices) = data.to_scene_format();
        assert_eq!(vertices.len(), data.vertex_count());
        assert_eq!(indices, data.indices);
        assert_eq!(vertices[0].position, [2.0, 0.0, 0.0]);
        assert_eq!(vertices[0].normal, [1.0, 0.0, 0.0]);
    }
}
