//! # Graphics Module
//!
//! Everything between the scene description and pixels on screen.
//!
//! - **Camera System** ([`camera`]) - orthographic cameras and their uniforms
//! - **Geometry** ([`geometry`]) - procedural meshes (boxes, spheres, tubes, ...)
//! - **Scene Management** ([`scene`]) - node hierarchy, the demo layout and draw collection
//! - **Resource Management** ([`resources`]) - materials, depth buffer and bind groups
//! - **Rendering** ([`rendering`]) - pipelines, GPU meshes and the per-frame render pass
//!
//! ## Usage
//!
//! ```no_run
//! use compound_viewer::{gfx::Scene, ViewerConfig};
//!
//! let scene = Scene::demo(&ViewerConfig::default()).unwrap();
//! for draw in scene.collect_draws() {
//!     println!("{:?} with {:?}", draw.mesh, draw.material.color);
//! }
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use camera::OrthoCamera;
pub use rendering::RenderEngine;
pub use scene::Scene;
