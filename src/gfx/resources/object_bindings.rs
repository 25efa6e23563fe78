//! Per-draw uniforms, bound to slot 1 with a dynamic offset

use crate::wgpu_utils::{binding_types, uniform_buffer::DynamicUniformBuffer};

use super::material::ObjectUniform;

const INITIAL_SLOTS: usize = 32;

pub struct ObjectBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    buffer: DynamicUniformBuffer<ObjectUniform>,
    bind_group: wgpu::BindGroup,
}

impl ObjectBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = binding_types::single_entry_layout(
            device,
            binding_types::dynamic_uniform(std::mem::size_of::<ObjectUniform>() as u64),
            "Object Layout (dynamic)",
        );
        let buffer = DynamicUniformBuffer::new(device, INITIAL_SLOTS);
        let bind_group = Self::create_bind_group(device, &bind_group_layout, &buffer);

        Self {
            bind_group_layout,
            buffer,
            bind_group,
        }
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &DynamicUniformBuffer<ObjectUniform>,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.binding_resource(),
            }],
        })
    }

    /// Uploads this frame's uniforms, one slot per draw, growing the buffer if needed
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, uniforms: &[ObjectUniform]) {
        if self.buffer.ensure_capacity(device, uniforms.len()) {
            self.bind_group = Self::create_bind_group(device, &self.bind_group_layout, &self.buffer);
        }
        self.buffer.write_all(queue, uniforms);
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Dynamic offset of the `index`-th uploaded uniform
    pub fn offset(&self, index: usize) -> u32 {
        self.buffer.offset(index)
    }
}
