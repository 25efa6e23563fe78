//! WGPU binding type utilities

/// Uniform buffer bound whole
pub fn uniform() -> wgpu::BindingType {
    wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: false,
        min_binding_size: None,
    }
}

/// Uniform buffer addressed per draw through a dynamic offset; `element_size` is one slot
pub fn dynamic_uniform(element_size: u64) -> wgpu::BindingType {
    wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: true,
        min_binding_size: wgpu::BufferSize::new(element_size),
    }
}

/// Single-entry layout visible to the vertex and fragment stages
pub fn single_entry_layout(
    device: &wgpu::Device,
    ty: wgpu::BindingType,
    label: &str,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty,
            count: None,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_uniform_sets_slot_size() {
        match dynamic_uniform(80) {
            wgpu::BindingType::Buffer {
                has_dynamic_offset,
                min_binding_size,
                ..
            } => {
                assert!(has_dynamic_offset);
                assert_eq!(min_binding_size.map(|s| s.get()), Some(80));
            }
            other => panic!("unexpected binding type {other:?}"),
        }
    }
}
