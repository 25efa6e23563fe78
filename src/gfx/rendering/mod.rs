// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles render pipelines, mesh upload and frame rendering.

pub mod mesh;
pub mod pipeline_manager;
pub mod render_engine;

// Re-export main types
pub use mesh::{DrawMesh, GpuMesh};
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
