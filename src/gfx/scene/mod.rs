//! # Scene Management Module
//!
//! An owned scene graph of [`SceneNode`]s. The [`Scene`] holds the static
//! decorations, the articulated compound object and the geometry table the
//! renderer uploads once at startup.
//!
//! ## Key Components
//!
//! - [`Scene`] - geometry registry plus the node trees that reference it
//! - [`SceneNode`] - transform, optional [`Visual`] and children
//! - [`layout`] - the demo scene as plain data
//! - [`Vertex3D`] - GPU vertex format

pub mod layout;
pub mod node;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use node::{Axis, MeshId, SceneNode, Visual};
pub use scene::{DrawItem, Scene};
pub use vertex::Vertex3D;
