//! Unlit materials and per-draw uniform data
//!
//! Every visual node carries a [`BasicMaterial`]: one flat color plus a
//! wireframe switch. The render engine packs the material together with the
//! node's world matrix into an [`ObjectUniform`] for each draw.

use cgmath::Matrix4;

use crate::gfx::camera::camera_utils::convert_matrix4_to_array;

/// Flat colored material, optionally drawn as wireframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicMaterial {
    /// Display-space (gamma encoded) RGB in `0.0..=1.0`, written to a non-sRGB target as is
    pub color: [f32; 3],
    pub wireframe: bool,
}

impl BasicMaterial {
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            color,
            wireframe: false,
        }
    }

    /// Creates a material from a `0xRRGGBB` color
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new([channel(16), channel(8), channel(0)])
    }
}

impl Default for BasicMaterial {
    fn default() -> Self {
        Self::new([0.8, 0.8, 0.8])
    }
}

/// GPU uniform data for a single draw
///
/// MUST match the `Object` struct in `basic.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ObjectUniform {
    pub fn new(model: Matrix4<f32>, material: &BasicMaterial) -> Self {
        let [r, g, b] = material.color;
        Self {
            model: convert_matrix4_to_array(model),
            color: [r, g, b, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_splits_channels() {
        let material = BasicMaterial::from_hex(0xff8000);
        assert_eq!(material.color[0], 1.0);
        assert!((material.color[1] - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(material.color[2], 0.0);
        assert!(!material.wireframe);
    }

    #[test]
    fn test_object_uniform_layout() {
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 80);
    }
}
