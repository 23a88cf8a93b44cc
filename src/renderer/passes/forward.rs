use std::borrow::Cow;
use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use uuid::Uuid;

use crate::renderer::context::DEPTH_FORMAT;
use crate::renderer::mesh_buffers::Vertex;
use crate::renderer::passes::ModelBuffer;
use crate::renderer::{CameraMatrices, DrawItem, ShadowMap, WgpuContext};
use crate::scene::{DirectionalLight, PointLight};

/// Maximum point lights per frame; must match `forward.wgsl`.
pub const MAX_POINT_LIGHTS: usize = 4;

/// GPU layout of one point light.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PointLightUniform {
    /// xyz = world position
    pub position: Vec4,
    /// rgb = color, w = intensity
    pub color: Vec4,
    /// x = constant, y = linear, z = quadratic
    pub attenuation: Vec4,
}

impl From<&PointLight> for PointLightUniform {
    fn from(light: &PointLight) -> Self {
        let attenuation = light.attenuation();
        Self {
            position: light.position().extend(1.0),
            color: light.color().extend(light.intensity()),
            attenuation: Vec4::new(
                attenuation.constant,
                attenuation.linear,
                attenuation.quadratic,
                0.0,
            ),
        }
    }
}

/// Frame-global uniforms for the color pass; must match `forward.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub view_proj: Mat4,
    pub light_space: Mat4,
    pub camera_position: Vec4,
    pub sun_direction: Vec4,
    pub sun_color: Vec4,
    pub counts: Vec4,
    pub point_lights: [PointLightUniform; MAX_POINT_LIGHTS],
}

impl GlobalUniforms {
    /// Packs the camera and lights for upload. At most
    /// [`MAX_POINT_LIGHTS`] point lights are carried; extras are ignored.
    #[must_use]
    pub fn pack(
        camera: &CameraMatrices,
        sun: &DirectionalLight,
        point_lights: &[PointLight],
    ) -> Self {
        let mut packed = [PointLightUniform::zeroed(); MAX_POINT_LIGHTS];
        let count = point_lights.len().min(MAX_POINT_LIGHTS);
        for (slot, light) in packed.iter_mut().zip(&point_lights[..count]) {
            *slot = light.into();
        }

        Self {
            view_proj: camera.view_proj(),
            light_space: sun.light_space_matrix(),
            camera_position: camera.position.extend(1.0),
            sun_direction: sun.direction().extend(0.0),
            sun_color: sun.color().extend(sun.intensity()),
            counts: Vec4::new(count as f32, 0.0, 0.0, 0.0),
            point_lights: packed,
        }
    }
}

/// The lit color pass.
///
/// Shades every draw item with one shadowed directional light plus point
/// lights, sampling the shadow map produced by the depth pre-pass through
/// a comparison sampler. Must run strictly after the shadow map's
/// bind/unbind cycle within the frame.
pub struct ForwardPass {
    pipeline: wgpu::RenderPipeline,
    globals_layout: wgpu::BindGroupLayout,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: Option<wgpu::BindGroup>,
    models: ModelBuffer,
    material_layout: wgpu::BindGroupLayout,
    material_bind_groups: HashMap<Uuid, wgpu::BindGroup>,
}

impl ForwardPass {
    #[must_use]
    pub fn new(ctx: &WgpuContext, color_format: wgpu::TextureFormat) -> Self {
        let device = &ctx.device;

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Forward Globals Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<GlobalUniforms>() as u64,
                        ),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Forward Material Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Forward Globals Buffer"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let models = ModelBuffer::new(device, "Forward");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Forward Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!(
                "../shaders/forward.wgsl"
            ))),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Forward Pipeline Layout"),
            bind_group_layouts: &[
                Some(&globals_layout),
                Some(models.layout()),
                Some(&material_layout),
            ],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Forward Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: Some(true),
                depth_compare: Some(wgpu::CompareFunction::Less),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            globals_layout,
            globals_buffer,
            globals_bind_group: None,
            models,
            material_layout,
            material_bind_groups: HashMap::new(),
        }
    }

    /// Uploads frame uniforms and builds the bind groups the color pass
    /// needs: globals (including the shadow map's depth view) and one
    /// material group per distinct texture.
    pub fn prepare(
        &mut self,
        ctx: &WgpuContext,
        globals: &GlobalUniforms,
        models: &[Mat4],
        shadow_map: &ShadowMap,
        items: &[DrawItem<'_>],
    ) {
        ctx.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(globals));
        self.models.write(&ctx.device, &ctx.queue, "Forward", models);

        self.globals_bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Forward Globals BindGroup"),
            layout: &self.globals_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(shadow_map.depth_view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(shadow_map.comparison_sampler()),
                },
            ],
        }));

        for item in items {
            let texture = item.texture;
            self.material_bind_groups
                .entry(texture.id())
                .or_insert_with(|| {
                    ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                        label: Some("Forward Material BindGroup"),
                        layout: &self.material_layout,
                        entries: &[
                            wgpu::BindGroupEntry {
                                binding: 0,
                                resource: wgpu::BindingResource::TextureView(texture.view()),
                            },
                            wgpu::BindGroupEntry {
                                binding: 1,
                                resource: wgpu::BindingResource::Sampler(texture.sampler()),
                            },
                        ],
                    })
                });
        }
    }

    /// Records color draws into the open main pass.
    ///
    /// Item order must match the `models` slice passed to
    /// [`prepare`](Self::prepare), which must have run this frame.
    pub fn run(&self, pass: &mut wgpu::RenderPass<'_>, items: &[DrawItem<'_>]) {
        let Some(globals_bind_group) = &self.globals_bind_group else {
            log::warn!("forward pass run without prepare; skipping");
            return;
        };

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, globals_bind_group, &[]);
        for (index, item) in items.iter().enumerate() {
            pass.set_bind_group(1, self.models.bind_group(), &[self.models.offset(index as u32)]);
            if let Some(material) = self.material_bind_groups.get(&item.texture.id()) {
                pass.set_bind_group(2, material, &[]);
            }
            item.mesh.draw(pass);
        }
    }
}
