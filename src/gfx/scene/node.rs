//! # Scene Graph Nodes
//!
//! A [`SceneNode`] is a transform (position + XYZ Euler rotation) with an
//! optional [`Visual`] and an owned list of children. World matrices are not
//! cached; they are recomputed on every traversal, which is cheap for the
//! few dozen nodes a viewer scene holds.

use cgmath::{Euler, Matrix4, Rad, Vector3, Zero};

use crate::gfx::resources::material::BasicMaterial;

/// Index of a geometry registered in a [`Scene`](super::Scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// Cartesian axis of the node's local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Mesh + material pair that makes a node drawable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub mesh: MeshId,
    pub material: BasicMaterial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    pub visual: Option<Visual>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Creates an empty group (or pivot) node at the origin
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector3::zero(),
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            visual: None,
            children: Vec::new(),
        }
    }

    /// Creates a drawable node for a registered mesh
    pub fn mesh(name: impl Into<String>, mesh: MeshId, material: BasicMaterial) -> Self {
        Self {
            visual: Some(Visual { mesh, material }),
            ..Self::group(name)
        }
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Euler<Rad<f32>>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child and returns its index in [`SceneNode::children`]
    pub fn add_child(&mut self, child: SceneNode) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Adds `amount` to the position component along `axis`
    pub fn translate(&mut self, axis: Axis, amount: f32) {
        match axis {
            Axis::X => self.position.x += amount,
            Axis::Y => self.position.y += amount,
            Axis::Z => self.position.z += amount,
        }
    }

    /// Adds `angle` to the Euler rotation component about `axis`
    pub fn rotate_about(&mut self, axis: Axis, angle: Rad<f32>) {
        match axis {
            Axis::X => self.rotation.x.0 += angle.0,
            Axis::Y => self.rotation.y.0 += angle.0,
            Axis::Z => self.rotation.z.0 += angle.0,
        }
    }

    /// Current rotation about `axis`
    pub fn rotation_about(&self, axis: Axis) -> Rad<f32> {
        match axis {
            Axis::X => self.rotation.x,
            Axis::Y => self.rotation.y,
            Axis::Z => self.rotation.z,
        }
    }

    /// Local transform: translation, then rotations applied in X, Y, Z order
    pub fn local_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(self.rotation.x)
            * Matrix4::from_angle_y(self.rotation.y)
            * Matrix4::from_angle_z(self.rotation.z)
    }

    /// Depth-first traversal handing each node its world matrix
    pub fn visit(&self, parent: &Matrix4<f32>, f: &mut dyn FnMut(&Matrix4<f32>, &SceneNode)) {
        let world = parent * self.local_matrix();
        f(&world, self);
        for child in &self.children {
            child.visit(&world, f);
        }
    }

    /// Depth-first mutable traversal, parents before children
    pub fn visit_mut(&mut self, f: &mut dyn FnMut(&mut SceneNode)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }

    /// Number of drawable nodes in this subtree, including self
    pub fn visual_count(&self) -> usize {
        let own = usize::from(self.visual.is_some());
        own + self.children.iter().map(SceneNode::visual_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, SquareMatrix, Vector4};
    use std::f32::consts::FRAC_PI_2;

    fn material() -> BasicMaterial {
        BasicMaterial::from_hex(0xff0000)
    }

    #[test]
    fn test_translate_touches_single_axis() {
        let mut node = SceneNode::group("pivot");
        node.translate(Axis::Y, 2.5);
        assert_eq!(node.position, Vector3::new(0.0, 2.5, 0.0));
        node.translate(Axis::X, -1.0);
        assert_eq!(node.position, Vector3::new(-1.0, 2.5, 0.0));
    }

    #[test]
    fn test_rotate_about_accumulates() {
        let mut node = SceneNode::group("pivot");
        node.rotate_about(Axis::Z, Rad(0.25));
        node.rotate_about(Axis::Z, Rad(0.5));
        assert_eq!(node.rotation_about(Axis::Z), Rad(0.75));
        assert_eq!(node.rotation_about(Axis::X), Rad(0.0));
        assert_eq!(node.rotation_about(Axis::Y), Rad(0.0));
    }

    #[test]
    fn test_visit_composes_parent_transforms() {
        let child = SceneNode::mesh("ball", MeshId(0), material())
            .with_position(Vector3::new(1.0, 0.0, 0.0));
        let root = SceneNode::group("root")
            .with_position(Vector3::new(0.0, 0.0, 5.0))
            .with_rotation(Euler::new(Rad(0.0), Rad(0.0), Rad(FRAC_PI_2)))
            .with_child(child);

        let mut origins = Vec::new();
        root.visit(&Matrix4::identity(), &mut |world, node| {
            if node.visual.is_some() {
                origins.push(world * Vector4::new(0.0, 0.0, 0.0, 1.0));
            }
        });

        assert_eq!(origins.len(), 1);
        // Rotating +90 degrees about Z maps +X onto +Y
        let expected = Vector4::new(0.0, 1.0, 5.0, 1.0);
        assert!((origins[0] - expected).magnitude() < 1e-5);
    }

    #[test]
    fn test_visit_mut_reaches_every_node() {
        let mut root = SceneNode::group("root")
            .with_child(SceneNode::mesh("a", MeshId(0), material()))
            .with_child(
                SceneNode::group("inner").with_child(SceneNode::mesh("b", MeshId(1), material())),
            );

        let mut count = 0;
        root.visit_mut(&mut |_| count += 1);
        assert_eq!(count, 4);
        assert_eq!(root.visual_count(), 2);
    }
}
