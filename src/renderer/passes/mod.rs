//! Render passes
//!
//! The frame is two strictly sequential passes:
//! - [`ShadowPass`]: depth pre-pass into the shadow map, from the
//!   directional light's point of view
//! - [`ForwardPass`]: the lit color pass, sampling the shadow map

pub mod forward;
pub mod shadow;

pub use forward::ForwardPass;
pub use shadow::ShadowPass;

use glam::Mat4;

/// Per-object model matrices in a dynamic-offset uniform buffer.
///
/// One aligned slot per draw item, capacity doubling on growth. Both passes
/// own one of these; the bind group is rebuilt whenever the buffer is
/// reallocated.
pub(crate) struct ModelBuffer {
    layout: wgpu::BindGroupLayout,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: u32,
    stride: u32,
}

impl ModelBuffer {
    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let min_alignment = device.limits().min_uniform_buffer_offset_alignment.max(1);
        let stride = align_to(std::mem::size_of::<Mat4>() as u32, min_alignment);

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{label} Model Layout")),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Mat4>() as u64),
                },
                count: None,
            }],
        });

        let buffer = Self::create_buffer(device, label, stride, 1);
        let bind_group = Self::create_bind_group(device, label, &layout, &buffer);

        Self {
            layout,
            buffer,
            bind_group,
            capacity: 1,
            stride,
        }
    }

    fn create_buffer(device: &wgpu::Device, label: &str, stride: u32, capacity: u32) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} Model Buffer")),
            size: u64::from(stride) * u64::from(capacity),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Model BindGroup")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<Mat4>() as u64),
                }),
            }],
        })
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Dynamic offset of slot `index`.
    pub fn offset(&self, index: u32) -> u32 {
        index * self.stride
    }

    /// Uploads one model matrix per slot, growing the buffer as needed.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, label: &str, models: &[Mat4]) {
        let required = models.len().max(1) as u32;
        if required > self.capacity {
            let mut capacity = self.capacity.max(1);
            while capacity < required {
                capacity = capacity.saturating_mul(2);
            }
            self.buffer = Self::create_buffer(device, label, self.stride, capacity);
            self.bind_group = Self::create_bind_group(device, label, &self.layout, &self.buffer);
            self.capacity = capacity;
        }

        if models.is_empty() {
            return;
        }

        let mut staged = vec![0u8; self.stride as usize * models.len()];
        for (i, model) in models.iter().enumerate() {
            let offset = i * self.stride as usize;
            let bytes = bytemuck::bytes_of(model);
            staged[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.buffer, 0, &staged);
    }
}

pub(crate) fn align_to(value: u32, alignment: u32) -> u32 {
    value.div_ceil(alignment) * alignment
}
