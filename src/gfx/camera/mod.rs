pub mod camera_utils;
pub mod ortho_camera;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use ortho_camera::OrthoCamera;
