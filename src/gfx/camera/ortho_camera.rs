use cgmath::{ortho, InnerSpace, Matrix4, Point3, Vector3};

use super::camera_utils::{Camera, OPENGL_TO_WGPU_MATRIX};

/// Fixed orthographic camera
///
/// The view volume is derived from the viewport: half-extents are the
/// viewport size divided by `zoom_divisor`, so a larger divisor zooms in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub zoom_divisor: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for OrthoCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj = OPENGL_TO_WGPU_MATRIX
            * ortho(
                self.left,
                self.right,
                self.bottom,
                self.top,
                self.znear,
                self.zfar,
            );
        proj * view
    }

    fn eye(&self) -> Point3<f32> {
        self.eye
    }
}

impl OrthoCamera {
    /// Creates a camera at `eye` looking at `target`, sized for a `width`×`height` viewport
    pub fn new(
        eye: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        zoom_divisor: f32,
        width: u32,
        height: u32,
    ) -> Self {
        let mut camera = Self {
            eye,
            target,
            up,
            zoom_divisor,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            znear: 0.1,
            zfar: 2000.0,
        };
        camera.resize_projection(width, height);
        camera
    }

    pub fn with_clip_planes(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Recomputes the view volume for a new viewport size
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        let half_width = width as f32 / self.zoom_divisor;
        let half_height = height as f32 / self.zoom_divisor;
        self.left = -half_width;
        self.right = half_width;
        self.top = half_height;
        self.bottom = -half_height;
    }

    /// Unit vector from the eye towards the target
    pub fn view_direction(&self) -> Vector3<f32> {
        (self.target - self.eye).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Transform, Vector4};

    fn front() -> OrthoCamera {
        OrthoCamera::new(
            Point3::new(0.0, 0.0, 300.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
            7.0,
            1400,
            700,
        )
    }

    #[test]
    fn test_bounds_follow_viewport() {
        let mut camera = front();
        assert_eq!((camera.left, camera.right), (-200.0, 200.0));
        assert_eq!((camera.bottom, camera.top), (-100.0, 100.0));

        camera.resize_projection(700, 350);
        assert_eq!((camera.left, camera.right), (-100.0, 100.0));
        assert_eq!((camera.bottom, camera.top), (-50.0, 50.0));
    }

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = front();
        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
        // wgpu depth range is 0..1
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn test_bounds_map_to_clip_edges() {
        let camera = front();
        let matrix = camera.build_view_projection_matrix();
        let corner = matrix.transform_point(Point3::new(200.0, 100.0, 0.0));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_is_depth_independent() {
        let camera = front();
        let matrix = camera.build_view_projection_matrix();
        for z in [100.0, 0.0, -100.0] {
            let clip = matrix * Vector4::new(100.0, 0.0, z, 1.0);
            assert!((clip.w - 1.0).abs() < 1e-6);

            let ndc = matrix.transform_point(Point3::new(100.0, 0.0, z));
            assert!((ndc.x - 0.5).abs() < 1e-5);
            assert!(ndc.z > 0.0 && ndc.z < 1.0, "depth {} at z={z}", ndc.z);
        }
    }

    #[test]
    fn test_near_geometry_is_shallower() {
        let matrix = front().build_view_projection_matrix();
        let near = matrix.transform_point(Point3::new(0.0, 0.0, 100.0));
        let far = matrix.transform_point(Point3::new(0.0, 0.0, -100.0));
        assert!(near.z < far.z);
    }

    #[test]
    fn test_view_direction() {
        assert_eq!(front().view_direction(), Vector3::new(0.0, 0.0, -1.0));
    }
}
