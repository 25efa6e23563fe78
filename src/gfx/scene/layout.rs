//! Declarative description of the demo scene
//!
//! Decorations are static meshes placed directly in the world. The three
//! compound segments are pivots whose parts are offset from the pivot, so
//! rotating a segment swings its parts around the pivot point.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use crate::compound::Rank;
use crate::gfx::geometry::{
    generate_box, generate_cone, generate_cylinder, generate_octahedron, generate_sphere,
    generate_torus, generate_tube, GeometryData, SineCurve,
};

/// Parameters of a procedural mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// Tube swept along a [`SineCurve`]
    SineTube {
        scale: f32,
        tubular_segments: u32,
        radius: f32,
        radial_segments: u32,
    },
    Octahedron {
        radius: f32,
    },
}

impl Shape {
    pub fn generate(&self) -> GeometryData {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
                segments,
            } => generate_box(width, height, depth, segments, segments, segments),
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => generate_sphere(radius, width_segments, height_segments),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            } => generate_cylinder(radius_top, radius_bottom, height, radial_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => generate_cone(radius, height, radial_segments),
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => generate_torus(radius, tube, radial_segments, tubular_segments),
            Shape::SineTube {
                scale,
                tubular_segments,
                radius,
                radial_segments,
            } => generate_tube(
                &SineCurve::new(scale),
                tubular_segments,
                radius,
                radial_segments,
            ),
            Shape::Octahedron { radius } => generate_octahedron(radius),
        }
    }
}

/// A mesh placed at a fixed transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub name: &'static str,
    pub shape: Shape,
    /// `0xRRGGBB`
    pub color: u32,
    pub position: [f32; 3],
    /// XYZ Euler angles in radians
    pub rotation: [f32; 3],
}

/// Pivot and attached parts of one compound segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    pub rank: Rank,
    pub pivot: [f32; 3],
    pub parts: &'static [Decoration],
}

const NO_ROTATION: [f32; 3] = [0.0, 0.0, 0.0];

const RING_MOON: u32 = 0x94846c;

pub const DECORATIONS: &[Decoration] = &[
    Decoration {
        name: "s-tube",
        shape: Shape::SineTube {
            scale: 10.0,
            tubular_segments: 20,
            radius: 1.0,
            radial_segments: 8,
        },
        color: 0x40ffef,
        position: [-95.0, 65.0, -25.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "central-ring",
        shape: Shape::Torus {
            radius: 90.0,
            tube: 1.0,
            radial_segments: 16,
            tubular_segments: 40,
        },
        color: 0xffff00,
        position: [0.0, 0.0, 0.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "pyramid",
        shape: Shape::Cone {
            radius: 40.0,
            height: 105.0,
            radial_segments: 4,
        },
        color: 0x03fc20,
        position: [0.0, 0.0, -140.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "front-cube",
        shape: Shape::Box {
            width: 50.0,
            height: 50.0,
            depth: 50.0,
            segments: 4,
        },
        color: 0xfc3d03,
        position: [51.5, -75.0, 75.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "saturn",
        shape: Shape::Sphere {
            radius: 24.0,
            width_segments: 12,
            height_segments: 8,
        },
        color: 0xf1c681,
        position: [-90.0, -50.0, 35.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "saturn-ring",
        shape: Shape::Torus {
            radius: 26.0,
            tube: 1.0,
            radial_segments: 16,
            tubular_segments: 24,
        },
        color: RING_MOON,
        position: [-90.0, -50.0, 35.0],
        rotation: [FRAC_PI_2, 0.0, 0.0],
    },
    Decoration {
        name: "side-ball",
        shape: Shape::Sphere {
            radius: 15.0,
            width_segments: 12,
            height_segments: 8,
        },
        color: 0xfc03fc,
        position: [125.0, 10.0, 60.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "far-ball",
        shape: Shape::Sphere {
            radius: 5.0,
            width_segments: 12,
            height_segments: 8,
        },
        color: 0xbc40ff,
        position: [30.0, 70.0, -180.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "octahedron",
        shape: Shape::Octahedron { radius: 10.0 },
        color: 0x3d03fc,
        position: [70.0, 50.0, -85.0],
        rotation: NO_ROTATION,
    },
    Decoration {
        name: "prism",
        shape: Shape::Cylinder {
            radius_top: 10.0,
            radius_bottom: 10.0,
            height: 6.0,
            radial_segments: 3,
        },
        color: 0xff7340,
        position: [-115.0, 85.0, 85.0],
        rotation: [FRAC_PI_6, 0.0, FRAC_PI_2],
    },
    Decoration {
        name: "small-ring",
        shape: Shape::Torus {
            radius: 10.0,
            tube: 2.5,
            radial_segments: 16,
            tubular_segments: 24,
        },
        color: RING_MOON,
        position: [80.0, -27.5, -15.0],
        rotation: [FRAC_PI_2, 0.0, 0.0],
    },
];

pub const COMPOUND_SEGMENTS: [SegmentLayout; 3] = [
    SegmentLayout {
        rank: Rank::Primary,
        pivot: [0.0, 0.0, -45.0],
        parts: &[Decoration {
            name: "cone",
            shape: Shape::Cone {
                radius: 5.0,
                height: 10.0,
                radial_segments: 30,
            },
            color: 0xfc03e3,
            position: [0.0, 0.0, 0.0],
            rotation: [PI, 0.0, 0.0],
        }],
    },
    SegmentLayout {
        rank: Rank::Secondary,
        pivot: [0.0, 0.0, 0.0],
        parts: &[
            Decoration {
                name: "small-cube",
                shape: Shape::Box {
                    width: 4.0,
                    height: 4.0,
                    depth: 4.0,
                    segments: 5,
                },
                color: 0xfc9803,
                position: [0.0, -18.0, 0.0],
                rotation: NO_ROTATION,
            },
            Decoration {
                name: "slab",
                shape: Shape::Box {
                    width: 20.0,
                    height: 4.0,
                    depth: 20.0,
                    segments: 3,
                },
                color: 0xfc9803,
                position: [0.0, -22.0, 0.0],
                rotation: NO_ROTATION,
            },
        ],
    },
    SegmentLayout {
        rank: Rank::Tertiary,
        pivot: [0.0, -20.0, 0.0],
        parts: &[Decoration {
            name: "ball",
            shape: Shape::Sphere {
                radius: 3.0,
                width_segments: 12,
                height_segments: 8,
            },
            color: 0xbc40ff,
            position: [-45.0, 0.0, 0.0],
            rotation: NO_ROTATION,
        }],
    },
];
