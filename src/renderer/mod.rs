//! Renderer
//!
//! The GPU half of the engine:
//! - [`WgpuContext`]: explicit device/queue handles
//! - [`Texture`] / [`GpuMesh`]: GPU-resident resources with explicit release
//! - [`ShadowMap`]: the depth-only render target and its bind protocol
//! - [`passes`]: the depth pre-pass and the lit color pass
//! - [`Renderer`]: per-frame orchestration of the two passes
//!
//! Everything here is single-threaded and frame-synchronous: within one
//! frame the shadow map is bound, depth-drawn and unbound strictly before
//! any color-pass fragment samples it.

pub mod context;
pub mod mesh_buffers;
pub mod passes;
pub mod shadow_map;
pub mod texture;

pub use context::WgpuContext;
pub use mesh_buffers::{GpuMesh, Vertex};
pub use passes::{ForwardPass, ShadowPass};
pub use shadow_map::{BindState, PassTracker, ShadowMap, ShadowMapConfig, Viewport};
pub use texture::Texture;

use glam::Mat4;

use crate::errors::Result;
use crate::scene::{DirectionalLight, PointLight};

/// View and projection matrices supplied by the camera, which lives
/// outside this crate.
#[derive(Debug, Clone, Copy)]
pub struct CameraMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    /// World-space camera position, for view-dependent shading.
    pub position: glam::Vec3,
}

impl CameraMatrices {
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// One renderable item: GPU mesh, material texture, world transform.
///
/// Borrowed per frame from whatever owns the resources; the renderer never
/// takes ownership of meshes or textures.
#[derive(Clone, Copy)]
pub struct DrawItem<'a> {
    pub mesh: &'a GpuMesh,
    pub texture: &'a Texture,
    pub model_matrix: Mat4,
}

/// Per-frame orchestration: shadow depth pre-pass, then the color pass.
pub struct Renderer {
    shadow_map: ShadowMap,
    shadow_pass: ShadowPass,
    forward_pass: ForwardPass,
    pub clear_color: wgpu::Color,
}

impl Renderer {
    /// Builds the renderer and its shadow map.
    ///
    /// Fails with [`UmbraError::FramebufferIncomplete`] if the shadow
    /// target cannot be created; the error is fatal to shadow rendering
    /// and is surfaced rather than downgraded.
    ///
    /// [`UmbraError::FramebufferIncomplete`]: crate::errors::UmbraError::FramebufferIncomplete
    pub fn new(
        ctx: &WgpuContext,
        color_format: wgpu::TextureFormat,
        shadow_config: &ShadowMapConfig,
    ) -> Result<Self> {
        let shadow_map = ShadowMap::new(ctx, shadow_config)?;
        let shadow_pass = ShadowPass::new(ctx);
        let forward_pass = ForwardPass::new(ctx, color_format);

        Ok(Self {
            shadow_map,
            shadow_pass,
            forward_pass,
            clear_color: wgpu::Color {
                r: 0.05,
                g: 0.05,
                b: 0.08,
                a: 1.0,
            },
        })
    }

    #[inline]
    #[must_use]
    pub fn shadow_map(&self) -> &ShadowMap {
        &self.shadow_map
    }

    /// Renders one frame: depth pre-pass into the shadow map, then the lit
    /// color pass into `color_view`/`depth_view` at `width`×`height`.
    ///
    /// The two passes are strictly sequential; the color pass samples the
    /// depth texture the pre-pass just produced. Rendering errors here are
    /// treated as fatal — a silently skipped pass would produce a visibly
    /// corrupt frame.
    pub fn render(
        &mut self,
        ctx: &WgpuContext,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
        width: u32,
        height: u32,
        camera: &CameraMatrices,
        sun: &DirectionalLight,
        point_lights: &[PointLight],
        items: &[DrawItem<'_>],
    ) -> Result<()> {
        let models: Vec<Mat4> = items.iter().map(|item| item.model_matrix).collect();
        let globals = passes::forward::GlobalUniforms::pack(camera, sun, point_lights);

        self.shadow_pass
            .prepare(ctx, sun.light_space_matrix(), &models);
        self.forward_pass
            .prepare(ctx, &globals, &models, &self.shadow_map, items);

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Depth pre-pass
        {
            let mut pass = self.shadow_map.bind_for_writing(&mut encoder)?;
            self.shadow_pass.run(&mut pass, items);
            self.shadow_map.unbind_after_writing(pass, width, height)?;
        }

        // Color pass
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Forward Color Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let viewport = self.shadow_map.viewport();
            pass.set_viewport(
                0.0,
                0.0,
                viewport.width as f32,
                viewport.height as f32,
                0.0,
                1.0,
            );
            self.forward_pass.run(&mut pass, items);
        }

        ctx.queue.submit(Some(encoder.finish()));
        Ok(())
    }

    /// Releases the renderer's GPU resources at engine shutdown.
    pub fn cleanup(self) {
        self.shadow_map.cleanup();
    }
}
