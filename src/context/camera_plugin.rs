//! The three fixed orthographic views and the current selection

use cgmath::{Point3, Vector3};

use crate::config::CameraSettings;
use crate::gfx::camera::OrthoCamera;

/// Which of the fixed cameras is looking at the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKind {
    /// Looks along -Z
    Frontal,
    /// Looks along -Y
    Top,
    /// Looks along -X
    Side,
}

impl CameraKind {
    pub const ALL: [CameraKind; 3] = [CameraKind::Frontal, CameraKind::Top, CameraKind::Side];

    fn index(self) -> usize {
        match self {
            CameraKind::Frontal => 0,
            CameraKind::Top => 1,
            CameraKind::Side => 2,
        }
    }
}

pub struct CameraPlugin {
    cameras: [OrthoCamera; 3],
    current: CameraKind,
}

impl CameraPlugin {
    /// Builds the three cameras for a `width`×`height` viewport; frontal is selected
    pub fn new(width: u32, height: u32, settings: &CameraSettings) -> Self {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let d = settings.distance;

        let build = |eye: Point3<f32>, up: Vector3<f32>, zoom: f32| {
            OrthoCamera::new(eye, origin, up, zoom, width, height)
                .with_clip_planes(settings.znear, settings.zfar)
        };

        // The top camera looks straight down the world up axis, so it uses -Z as its up
        let cameras = [
            build(Point3::new(0.0, 0.0, d), Vector3::unit_y(), settings.frontal_zoom),
            build(Point3::new(0.0, d, 0.0), -Vector3::unit_z(), settings.top_zoom),
            build(Point3::new(d, 0.0, 0.0), Vector3::unit_y(), settings.side_zoom),
        ];

        Self {
            cameras,
            current: CameraKind::Frontal,
        }
    }

    pub fn select(&mut self, kind: CameraKind) {
        if self.current != kind {
            log::info!("Switching to {kind:?} camera");
        }
        self.current = kind;
    }

    pub fn current(&self) -> &OrthoCamera {
        &self.cameras[self.current.index()]
    }

    pub fn current_kind(&self) -> CameraKind {
        self.current
    }

    pub fn camera(&self, kind: CameraKind) -> &OrthoCamera {
        &self.cameras[kind.index()]
    }

    /// Rebuilds every camera's view volume for a new viewport size
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        for camera in &mut self.cameras {
            camera.resize_projection(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::Camera;

    fn plugin() -> CameraPlugin {
        CameraPlugin::new(1400, 800, &CameraSettings::default())
    }

    #[test]
    fn test_frontal_is_default() {
        let plugin = plugin();
        assert_eq!(plugin.current_kind(), CameraKind::Frontal);
        assert_eq!(plugin.current().eye, Point3::new(0.0, 0.0, 300.0));
    }

    #[test]
    fn test_cameras_look_down_their_axes() {
        let plugin = plugin();
        assert_eq!(
            plugin.camera(CameraKind::Frontal).view_direction(),
            Vector3::new(0.0, 0.0, -1.0)
        );
        assert_eq!(
            plugin.camera(CameraKind::Top).view_direction(),
            Vector3::new(0.0, -1.0, 0.0)
        );
        assert_eq!(
            plugin.camera(CameraKind::Side).view_direction(),
            Vector3::new(-1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = plugin();
        once.select(CameraKind::Top);

        let mut twice = plugin();
        twice.select(CameraKind::Top);
        twice.select(CameraKind::Top);

        assert_eq!(once.current(), twice.current());
        assert_eq!(twice.current(), twice.camera(CameraKind::Top));
        assert_eq!(twice.current().eye, Point3::new(0.0, 300.0, 0.0));
    }

    #[test]
    fn test_zoom_divisor_per_view() {
        let plugin = plugin();
        assert_eq!(plugin.camera(CameraKind::Frontal).right, 200.0);
        assert_eq!(plugin.camera(CameraKind::Top).right, 350.0);
        assert_eq!(plugin.camera(CameraKind::Top).top, 200.0);
        assert_eq!(plugin.camera(CameraKind::Side).top, 800.0 / 7.0);
    }

    #[test]
    fn test_resize_keeps_selection() {
        let mut plugin = plugin();
        plugin.select(CameraKind::Side);
        plugin.resize(700, 400);

        assert_eq!(plugin.current_kind(), CameraKind::Side);
        assert_eq!(plugin.camera(CameraKind::Frontal).right, 100.0);
        assert_eq!(plugin.camera(CameraKind::Top).top, 100.0);
    }

    #[test]
    fn test_zero_resize_is_ignored() {
        let mut plugin = plugin();
        plugin.resize(0, 0);
        plugin.resize(640, 0);

        let frontal = plugin.camera(CameraKind::Frontal);
        assert_eq!(frontal.right, 200.0);
        assert!(frontal
            .build_view_projection_matrix()
            .x
            .x
            .is_finite());
    }
}
