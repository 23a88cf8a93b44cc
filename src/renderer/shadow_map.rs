//! Shadow Map
//!
//! A depth-only render target rendered from the light's point of view and
//! sampled during the color pass. The bind/unbind protocol around the depth
//! pre-pass is an explicit state machine: out-of-order calls are reported
//! as errors instead of corrupting the frame.

use crate::errors::{Result, UmbraError};
use crate::renderer::WgpuContext;
use crate::renderer::context::DEPTH_FORMAT;

/// Default shadow map resolution (square).
pub const DEFAULT_SHADOW_RESOLUTION: u32 = 2048;

/// Shadow map construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct ShadowMapConfig {
    /// Side length of the square depth target, in texels.
    pub resolution: u32,
}

impl Default for ShadowMapConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_SHADOW_RESOLUTION,
        }
    }
}

/// The two states of the bind/unbind protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindState {
    /// No depth pass in flight; the default render target is active.
    Unbound,
    /// The depth-only framebuffer is the active render target.
    BoundForWriting,
}

impl BindState {
    fn name(self) -> &'static str {
        match self {
            BindState::Unbound => "Unbound",
            BindState::BoundForWriting => "BoundForWriting",
        }
    }
}

/// A viewport in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// GPU-free bookkeeping for the bind/unbind protocol.
///
/// Tracks the bind state and the viewport each transition installs, so the
/// ordering rules and the viewport-restore contract can be exercised
/// without a live device.
#[derive(Debug)]
pub struct PassTracker {
    state: BindState,
    viewport: Viewport,
}

impl PassTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BindState::Unbound,
            viewport: Viewport::default(),
        }
    }

    /// Transition `Unbound` → `BoundForWriting`, installing the shadow
    /// resolution as the active viewport.
    pub fn bind(&mut self, shadow_viewport: Viewport) -> Result<()> {
        if self.state != BindState::Unbound {
            return Err(UmbraError::InvalidBindState {
                expected: BindState::Unbound.name(),
                actual: self.state.name(),
            });
        }
        self.state = BindState::BoundForWriting;
        self.viewport = shadow_viewport;
        Ok(())
    }

    /// Transition `BoundForWriting` → `Unbound`, restoring the
    /// caller-supplied main viewport.
    ///
    /// The tracker has no memory of the window size — the caller must pass
    /// the current one.
    pub fn unbind(&mut self, main_viewport: Viewport) -> Result<()> {
        if self.state != BindState::BoundForWriting {
            return Err(UmbraError::InvalidBindState {
                expected: BindState::BoundForWriting.name(),
                actual: self.state.name(),
            });
        }
        self.state = BindState::Unbound;
        self.viewport = main_viewport;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> BindState {
        self.state
    }

    /// The currently active viewport: the shadow resolution while bound,
    /// the restored main viewport after unbinding.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Default for PassTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the depth-only render target used for the shadow pre-pass.
///
/// Constructed once — construction fails with
/// [`UmbraError::FramebufferIncomplete`] if the device cannot host the
/// depth attachment — reused every frame through
/// [`bind_for_writing`](Self::bind_for_writing) /
/// [`unbind_after_writing`](Self::unbind_after_writing), and destroyed
/// exactly once by the consuming [`cleanup`](Self::cleanup).
pub struct ShadowMap {
    resolution: u32,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    tracker: PassTracker,
}

impl ShadowMap {
    /// Creates the depth render target.
    ///
    /// The target has no color attachment: the depth pre-pass writes depth
    /// only, and the texture doubles as a comparison-sampled input for the
    /// color pass.
    pub fn new(ctx: &WgpuContext, config: &ShadowMapConfig) -> Result<Self> {
        let resolution = config.resolution;
        let max_dim = ctx.device.limits().max_texture_dimension_2d;
        if resolution == 0 || resolution > max_dim {
            return Err(UmbraError::FramebufferIncomplete(format!(
                "shadow resolution {resolution} outside device range 1..={max_dim}"
            )));
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Map Depth Texture"),
            size: wgpu::Extent3d {
                width: resolution,
                height: resolution,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Comparison sampler for PCF-style shadow lookups
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Map Comparison Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        log::info!("created {resolution}x{resolution} shadow map");

        Ok(Self {
            resolution,
            texture,
            view,
            sampler,
            tracker: PassTracker::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Depth texture view, sampled by the color pass after the depth
    /// pre-pass has completed.
    #[inline]
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    #[must_use]
    pub fn comparison_sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    #[inline]
    #[must_use]
    pub fn bind_state(&self) -> BindState {
        self.tracker.state()
    }

    /// The currently active viewport as tracked by the bind protocol.
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.tracker.viewport()
    }

    /// Begins the depth pre-pass.
    ///
    /// Only valid from `Unbound`. Redirects rendering to the depth-only
    /// framebuffer, clears depth to 1.0 (there is no color attachment to
    /// clear), and sets the viewport to the shadow resolution. Returns the
    /// open render pass for the caller to record depth draws into.
    pub fn bind_for_writing<'e>(
        &mut self,
        encoder: &'e mut wgpu::CommandEncoder,
    ) -> Result<wgpu::RenderPass<'e>> {
        self.tracker
            .bind(Viewport::new(self.resolution, self.resolution))?;

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shadow Depth Pass"),
            color_attachments: &[],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.view,
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
        pass.set_viewport(
            0.0,
            0.0,
            self.resolution as f32,
            self.resolution as f32,
            0.0,
            1.0,
        );

        Ok(pass)
    }

    /// Ends the depth pre-pass and restores the main render target.
    ///
    /// Only valid from `BoundForWriting`. The caller must pass the current
    /// window dimensions — the shadow map has no memory of them — and the
    /// color pass reads the restored viewport back via
    /// [`viewport`](Self::viewport).
    pub fn unbind_after_writing(
        &mut self,
        pass: wgpu::RenderPass<'_>,
        main_width: u32,
        main_height: u32,
    ) -> Result<()> {
        drop(pass);
        self.tracker.unbind(Viewport::new(main_width, main_height))
    }

    /// Releases the framebuffer and depth texture.
    ///
    /// Consumes the shadow map: no method can be called after cleanup.
    /// Valid immediately after construction, with no bind calls in between.
    pub fn cleanup(self) {
        log::info!("releasing {0}x{0} shadow map", self.resolution);
        self.texture.destroy();
    }
}
