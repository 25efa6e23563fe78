use cgmath::{Euler, Matrix4, Rad, SquareMatrix, Vector3};

use crate::compound::CompoundObject;
use crate::config::ViewerConfig;
use crate::error::CompoundError;
use crate::gfx::geometry::GeometryData;
use crate::gfx::resources::material::BasicMaterial;

use super::layout::{Decoration, COMPOUND_SEGMENTS, DECORATIONS};
use super::node::{MeshId, SceneNode};

/// One mesh to draw this frame, with its world transform resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub model: Matrix4<f32>,
    pub mesh: MeshId,
    pub material: BasicMaterial,
}

/// Main scene containing geometries, static decorations and the compound object
pub struct Scene {
    geometries: Vec<GeometryData>,
    decor: SceneNode,
    compound: CompoundObject,
}

impl Scene {
    pub fn new(compound: CompoundObject) -> Self {
        Self {
            geometries: Vec::new(),
            decor: SceneNode::group("decor"),
            compound,
        }
    }

    /// Registers a geometry; the returned id is its index for the renderer
    pub fn add_geometry(&mut self, data: GeometryData) -> MeshId {
        self.geometries.push(data);
        MeshId(self.geometries.len() - 1)
    }

    pub fn geometries(&self) -> &[GeometryData] {
        &self.geometries
    }

    pub fn add_decoration(&mut self, node: SceneNode) {
        self.decor.add_child(node);
    }

    pub fn decor(&self) -> &SceneNode {
        &self.decor
    }

    pub fn compound(&self) -> &CompoundObject {
        &self.compound
    }

    pub fn compound_mut(&mut self) -> &mut CompoundObject {
        &mut self.compound
    }

    /// Switches every drawable node, compound included, to or from wireframe
    pub fn set_wireframe(&mut self, enabled: bool) {
        let mut apply = |node: &mut SceneNode| {
            if let Some(visual) = node.visual.as_mut() {
                visual.material.wireframe = enabled;
            }
        };
        self.decor.visit_mut(&mut apply);
        self.compound.group_mut().visit_mut(&mut apply);
        log::debug!(
            "Applied wireframe={} to {} meshes",
            enabled,
            self.visual_count()
        );
    }

    /// Flattens the scene into draw items, decorations first
    pub fn collect_draws(&self) -> Vec<DrawItem> {
        let mut draws = Vec::with_capacity(self.visual_count());
        let mut collect = |world: &Matrix4<f32>, node: &SceneNode| {
            if let Some(visual) = node.visual {
                draws.push(DrawItem {
                    model: *world,
                    mesh: visual.mesh,
                    material: visual.material,
                });
            }
        };

        let identity = Matrix4::identity();
        self.decor.visit(&identity, &mut collect);
        self.compound.group().visit(&identity, &mut collect);
        draws
    }

    pub fn visual_count(&self) -> usize {
        self.decor.visual_count() + self.compound.group().visual_count()
    }

    /// Builds the demo scene: static decorations plus the three-segment compound object
    pub fn demo(config: &ViewerConfig) -> Result<Self, CompoundError> {
        let mut scene = Self::new(CompoundObject::with_steps(
            config.move_step,
            config.rotate_step,
        ));

        for decoration in DECORATIONS {
            let node = scene.place(decoration);
            scene.add_decoration(node);
        }

        for segment in &COMPOUND_SEGMENTS {
            let mut pivot = SceneNode::group(format!("{}-pivot", segment.rank))
                .with_position(Vector3::from(segment.pivot));
            for part in segment.parts {
                pivot.add_child(scene.place(part));
            }
            scene.compound.set_segment(segment.rank, pivot)?;
        }

        log::info!(
            "Built demo scene: {} geometries, {} meshes",
            scene.geometries.len(),
            scene.visual_count()
        );
        Ok(scene)
    }

    /// Generates the decoration's geometry and returns a node drawing it
    fn place(&mut self, decoration: &Decoration) -> SceneNode {
        let mesh = self.add_geometry(decoration.shape.generate());
        let [rx, ry, rz] = decoration.rotation;
        SceneNode::mesh(
            decoration.name,
            mesh,
            BasicMaterial::from_hex(decoration.color),
        )
        .with_position(Vector3::from(decoration.position))
        .with_rotation(Euler::new(Rad(rx), Rad(ry), Rad(rz)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::{Rank, Side};
    use crate::gfx::geometry::generate_octahedron;
    use cgmath::{InnerSpace, Vector4};

    fn demo() -> Scene {
        Scene::demo(&ViewerConfig::default()).unwrap()
    }

    #[test]
    fn test_demo_scene_composition() {
        let scene = demo();
        // 11 decorations + cone, two cubes and ball on the compound
        assert_eq!(scene.visual_count(), 15);
        assert_eq!(scene.geometries().len(), 15);
        assert_eq!(scene.decor().children.len(), 11);

        let compound = scene.compound();
        assert_eq!(compound.group().children.len(), 3);
        for rank in Rank::ALL {
            assert!(compound.segment(rank).is_some());
        }
        assert_eq!(compound.segment(Rank::Secondary).unwrap().children.len(), 2);
    }

    #[test]
    fn test_set_wireframe_reaches_every_visual() {
        let mut scene = demo();
        scene.set_wireframe(true);
        let draws = scene.collect_draws();
        assert_eq!(draws.len(), scene.visual_count());
        assert!(draws.iter().all(|d| d.material.wireframe));

        scene.set_wireframe(false);
        assert!(scene.collect_draws().iter().all(|d| !d.material.wireframe));
    }

    #[test]
    fn test_segment_rotation_swings_parts_about_pivot() {
        let mut scene = demo();
        let ball_origin = |scene: &Scene| {
            let draw = scene.collect_draws().last().copied().unwrap();
            draw.model * Vector4::new(0.0, 0.0, 0.0, 1.0)
        };

        // Pivot at (0, -20, 0), ball 45 units along -X from it
        let before = ball_origin(&scene);
        assert!((before - Vector4::new(-45.0, -20.0, 0.0, 1.0)).magnitude() < 1e-4);

        // Quarter turn about Y carries -X onto +Z
        let delta = std::f32::consts::FRAC_PI_2 / scene.compound().rotate_step();
        scene
            .compound_mut()
            .rotate(Rank::Tertiary, Side::Left, delta)
            .unwrap();

        let after = ball_origin(&scene);
        assert!((after - Vector4::new(0.0, -20.0, 45.0, 1.0)).magnitude() < 1e-3);
    }

    #[test]
    fn test_add_geometry_ids_are_sequential() {
        let mut scene = Scene::new(CompoundObject::new());
        assert_eq!(scene.add_geometry(generate_octahedron(1.0)), MeshId(0));
        assert_eq!(scene.add_geometry(generate_octahedron(2.0)), MeshId(1));

        scene.add_decoration(SceneNode::mesh("o", MeshId(1), BasicMaterial::default()));
        let draws = scene.collect_draws();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].mesh, MeshId(1));
        assert_eq!(draws[0].model, Matrix4::identity());
    }
}
