use std::borrow::Cow;

use glam::Mat4;

use crate::renderer::context::DEPTH_FORMAT;
use crate::renderer::mesh_buffers::Vertex;
use crate::renderer::passes::ModelBuffer;
use crate::renderer::{DrawItem, WgpuContext};

/// The depth pre-pass.
///
/// Renders every caster into the shadow map from the directional light's
/// point of view. The pipeline has no fragment stage: only depth is
/// written, matching the color-attachment-free target.
pub struct ShadowPass {
    pipeline: wgpu::RenderPipeline,
    light_buffer: wgpu::Buffer,
    light_bind_group: wgpu::BindGroup,
    models: ModelBuffer,
}

impl ShadowPass {
    #[must_use]
    pub fn new(ctx: &WgpuContext) -> Self {
        let device = &ctx.device;

        let light_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shadow Light Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Mat4>() as u64),
                },
                count: None,
            }],
        });

        let light_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shadow Light Buffer"),
            size: std::mem::size_of::<Mat4>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let light_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shadow Light BindGroup"),
            layout: &light_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: light_buffer.as_entire_binding(),
            }],
        });

        let models = ModelBuffer::new(device, "Shadow");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!(
                "../shaders/shadow.wgsl"
            ))),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[Some(&light_layout), Some(models.layout())],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: None,
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Front),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: Some(true),
                depth_compare: Some(wgpu::CompareFunction::Less),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            light_buffer,
            light_bind_group,
            models,
        }
    }

    /// Uploads this frame's light-space matrix and per-object model
    /// matrices (one slot per draw item, in draw order).
    pub fn prepare(&mut self, ctx: &WgpuContext, light_space: Mat4, models: &[Mat4]) {
        ctx.queue
            .write_buffer(&self.light_buffer, 0, bytemuck::bytes_of(&light_space));
        self.models.write(&ctx.device, &ctx.queue, "Shadow", models);
    }

    /// Records depth draws for all items into the open shadow pass.
    ///
    /// Item order must match the `models` slice passed to
    /// [`prepare`](Self::prepare).
    pub fn run(&self, pass: &mut wgpu::RenderPass<'_>, items: &[DrawItem<'_>]) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.light_bind_group, &[]);
        for (index, item) in items.iter().enumerate() {
            pass.set_bind_group(1, self.models.bind_group(), &[self.models.offset(index as u32)]);
            item.mesh.draw(pass);
        }
    }
}
