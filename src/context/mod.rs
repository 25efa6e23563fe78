//! # View Context
//!
//! [`ContextManagementEngine`] bundles the camera set and the wireframe flag
//! behind the single interface the frame loop and key controller use.

pub mod camera_plugin;
pub mod wireframe_plugin;

pub use camera_plugin::{CameraKind, CameraPlugin};
pub use wireframe_plugin::WireframePlugin;

use crate::config::CameraSettings;
use crate::controller::ViewContext;
use crate::gfx::camera::OrthoCamera;

pub struct ContextManagementEngine {
    camera: CameraPlugin,
    wireframe: WireframePlugin,
}

impl ContextManagementEngine {
    pub fn new(width: u32, height: u32, settings: &CameraSettings) -> Self {
        Self {
            camera: CameraPlugin::new(width, height, settings),
            wireframe: WireframePlugin::new(),
        }
    }

    /// Camera the renderer should draw with
    pub fn camera(&self) -> &OrthoCamera {
        self.camera.current()
    }

    pub fn camera_kind(&self) -> CameraKind {
        self.camera.current_kind()
    }

    pub fn select_camera(&mut self, kind: CameraKind) {
        self.camera.select(kind);
    }

    pub fn toggle_wireframe(&mut self) -> bool {
        self.wireframe.toggle()
    }

    pub fn wireframe_enabled(&self) -> bool {
        self.wireframe.is_enabled()
    }

    /// New wireframe state if it changed since the last call
    pub fn take_wireframe_change(&mut self) -> Option<bool> {
        self.wireframe.take_toggled()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }
}

impl ViewContext for ContextManagementEngine {
    fn select_camera(&mut self, kind: CameraKind) {
        ContextManagementEngine::select_camera(self, kind);
    }

    fn toggle_wireframe(&mut self) {
        ContextManagementEngine::toggle_wireframe(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_delegates_to_plugins() {
        let mut context = ContextManagementEngine::new(800, 600, &CameraSettings::default());
        assert_eq!(context.camera_kind(), CameraKind::Frontal);
        assert!(!context.wireframe_enabled());

        ViewContext::select_camera(&mut context, CameraKind::Top);
        ViewContext::toggle_wireframe(&mut context);

        assert_eq!(context.camera_kind(), CameraKind::Top);
        assert_eq!(context.camera().eye.y, 300.0);
        assert_eq!(context.take_wireframe_change(), Some(true));
    }
}
