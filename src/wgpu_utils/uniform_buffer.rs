use std::marker::PhantomData;

fn short_type_name<T>() -> &'static str {
    let type_name = std::any::type_name::<T>();
    match type_name.rfind(':') {
        Some(pos) => &type_name[(pos + 1)..],
        None => type_name,
    }
}

/// Rounds `value` up to the next multiple of `alignment` (a power of two)
pub fn align_up(value: u64, alignment: u64) -> u64 {
    (value + alignment - 1) & !(alignment - 1)
}

/// Typed wrapper around a single uniform buffer
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    previous_content: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", short_type_name::<Content>())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: Vec::new(),
        }
    }

    /// Writes `content` unless it is byte-identical to the last write
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.previous_content == new_content {
            return;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.previous_content = new_content.to_vec();
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}

/// One uniform buffer holding many `Content` slots, addressed with dynamic offsets
///
/// Slots are padded to the device's `min_uniform_buffer_offset_alignment`.
/// The buffer doubles in size when a frame needs more slots than it holds;
/// the caller must rebuild its bind group when [`ensure_capacity`](Self::ensure_capacity) returns `true`.
pub struct DynamicUniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    stride: u64,
    capacity: usize,
    staging: Vec<u8>,
}

impl<Content: bytemuck::Pod> DynamicUniformBuffer<Content> {
    pub fn new(device: &wgpu::Device, initial_capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = align_up(std::mem::size_of::<Content>() as u64, alignment);
        let capacity = initial_capacity.max(1);

        Self {
            buffer: Self::create_buffer(device, capacity, stride),
            content_type: PhantomData,
            stride,
            capacity,
            staging: Vec::new(),
        }
    }

    fn create_buffer(device: &wgpu::Device, capacity: usize, stride: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!(
                "DynamicUniformBuffer<{}>",
                short_type_name::<Content>()
            )),
            size: capacity as u64 * stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Grows the buffer to hold `needed` slots; `true` if it was reallocated
    pub fn ensure_capacity(&mut self, device: &wgpu::Device, needed: usize) -> bool {
        if needed <= self.capacity {
            return false;
        }
        let mut capacity = self.capacity;
        while capacity < needed {
            capacity *= 2;
        }
        log::debug!(
            "Growing {} from {} to {} slots",
            short_type_name::<Content>(),
            self.capacity,
            capacity
        );
        self.buffer = Self::create_buffer(device, capacity, self.stride);
        self.capacity = capacity;
        true
    }

    /// Uploads `contents` into consecutive slots starting at slot 0
    pub fn write_all(&mut self, queue: &wgpu::Queue, contents: &[Content]) {
        debug_assert!(contents.len() <= self.capacity, "slot out of range");
        if contents.is_empty() {
            return;
        }

        let stride = self.stride as usize;
        self.staging.clear();
        self.staging.resize(contents.len() * stride, 0);
        for (slot, content) in self.staging.chunks_exact_mut(stride).zip(contents) {
            let bytes = bytemuck::bytes_of(content);
            slot[..bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.buffer, 0, &self.staging);
    }

    /// Byte offset of `index` for `set_bind_group`
    pub fn offset(&self, index: usize) -> u32 {
        (index as u64 * self.stride) as u32
    }

    /// Binding covering exactly one slot, as the shader sees it
    pub fn binding_resource(&self) -> wgpu::BindingResource {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.buffer,
            offset: 0,
            size: wgpu::BufferSize::new(std::mem::size_of::<Content>() as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(80, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(80, 16), 80);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<UniformBuffer<u32>>(), "UniformBuffer<u32>");
        assert_eq!(short_type_name::<u32>(), "u32");
    }
}
