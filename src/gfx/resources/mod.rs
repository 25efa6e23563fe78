// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles materials, the depth buffer and the bind groups for rendering.

pub mod global_bindings;
pub mod material;
pub mod object_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO};
pub use material::{BasicMaterial, ObjectUniform};
pub use object_bindings::ObjectBindings;
pub use texture_resource::TextureResource;
