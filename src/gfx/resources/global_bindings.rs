//! Global uniform bindings for camera data
//!
//! Bound to slot 0 in every render pipeline.

use crate::{
    gfx::camera::camera_utils::{Camera, CameraUniform},
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Type alias for the global uniform buffer
///
/// Layout MUST match the `Camera` struct in `basic.wgsl`.
pub type GlobalUBO = UniformBuffer<CameraUniform>;

/// Uploads the camera's current view-projection matrix
pub fn update_global_ubo(ubo: &mut GlobalUBO, queue: &wgpu::Queue, camera: &impl Camera) {
    ubo.update_content(queue, camera.uniform());
}

/// Bind group layout and bind group for [`GlobalUBO`]
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout =
            binding_types::single_entry_layout(device, binding_types::uniform(), "Globals Layout");

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
