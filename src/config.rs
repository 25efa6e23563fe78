//! Viewer configuration
//!
//! Plain structs with sensible defaults and `with_*` builder methods. Log
//! verbosity is not part of this; it comes from `RUST_LOG`.

use crate::compound::{MOVE_STEP, ROTATE_STEP};
use crate::controller::KeyBindings;

/// Placement and zoom of the three fixed cameras
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Distance of every camera from the scene origin
    pub distance: f32,
    /// Viewport size is divided by these to get the orthographic half-extents
    pub frontal_zoom: f32,
    pub top_zoom: f32,
    pub side_zoom: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 300.0,
            frontal_zoom: 7.0,
            top_zoom: 4.0,
            side_zoom: 7.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

/// Surface presentation settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub clear_color: wgpu::Color,
    pub vsync: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: wgpu::Color::BLACK,
            vsync: true,
        }
    }
}

/// Everything needed to start the viewer
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Compound object translation speed, world units per second
    pub move_step: f32,
    /// Compound object rotation speed, radians per second
    pub rotate_step: f32,
    /// Upper bound for a single frame delta, in seconds
    pub max_frame_delta: Option<f32>,
    pub camera: CameraSettings,
    pub render: RenderSettings,
    pub key_bindings: KeyBindings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Compound Viewer".to_string(),
            width: 1280,
            height: 720,
            move_step: MOVE_STEP,
            rotate_step: ROTATE_STEP,
            max_frame_delta: Some(0.25),
            camera: CameraSettings::default(),
            render: RenderSettings::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_steps(mut self, move_step: f32, rotate_step: f32) -> Self {
        self.move_step = move_step;
        self.rotate_step = rotate_step;
        self
    }

    pub fn with_max_frame_delta(mut self, max_frame_delta: Option<f32>) -> Self {
        self.max_frame_delta = max_frame_delta;
        self
    }

    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_render(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }
}
