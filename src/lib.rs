// src/lib.rs
//! Compound Viewer
//!
//! An orthographic 3D scene viewer built on wgpu and winit. The scene holds
//! static decorations plus one articulated compound object that the keyboard
//! moves and bends; three fixed cameras and a wireframe toggle change how it
//! is seen.

pub mod app;
pub mod compound;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod gfx;
pub mod performance;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::{run, ViewerApp};
pub use compound::CompoundObject;
pub use config::ViewerConfig;
pub use context::ContextManagementEngine;
pub use controller::KeyController;
pub use error::{CompoundError, ViewerError};

/// Creates a viewer with the default configuration
pub fn default() -> Result<ViewerApp, ViewerError> {
    ViewerApp::new(ViewerConfig::default())
}
