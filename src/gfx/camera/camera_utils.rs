use cgmath::{Matrix4, Point3, SquareMatrix};

/// Anything that can produce a combined view-projection matrix
pub trait Camera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;

    fn eye(&self) -> Point3<f32>;

    /// Packs the camera into its GPU representation
    fn uniform(&self) -> CameraUniform {
        CameraUniform::new(self.eye(), self.build_view_projection_matrix())
    }
}

/// Maps OpenGL clip depth `-1..1` to wgpu's `0..1`; columns are listed in order
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(eye: Point3<f32>, view_proj: Matrix4<f32>) -> Self {
        Self {
            view_position: [eye.x, eye.y, eye.z, 1.0],
            view_proj: convert_matrix4_to_array(view_proj),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

/// Column-major array form expected by WGSL `mat4x4<f32>`
pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}
