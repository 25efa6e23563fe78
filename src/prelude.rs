//! # Compound Viewer Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use compound_viewer::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     let config = ViewerConfig::default().with_steps(MOVE_STEP * 2.0, ROTATE_STEP);
//!     ViewerApp::new(config)?.run()
//! }
//! ```

pub use crate::app::ViewerApp;
pub use crate::compound::{CompoundObject, Direction, Rank, Side, MOVE_STEP, ROTATE_STEP};
pub use crate::config::{CameraSettings, RenderSettings, ViewerConfig};
pub use crate::context::{CameraKind, ContextManagementEngine};
pub use crate::controller::{KeyBindings, KeyController, LogicalKey, Movable, ViewContext};
pub use crate::error::{CompoundError, ViewerError};
pub use crate::gfx::{
    geometry::GeometryData,
    resources::BasicMaterial,
    scene::{Axis, MeshId, Scene, SceneNode},
};

pub use cgmath::{Deg, Rad, Vector3};
