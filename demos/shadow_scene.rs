//! Headless shadow-mapping demo.
//!
//! Builds a small scene (a cube hovering over a ground plane), renders a
//! few frames into an offscreen target — depth pre-pass into the shadow
//! map, then the lit color pass — and shuts everything down explicitly.
//!
//! Run with `RUST_LOG=info cargo run --example shadow_scene`.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use umbra::renderer::{CameraMatrices, DrawItem, GpuMesh, Renderer, ShadowMapConfig, Texture, WgpuContext};
use umbra::scene::{DirectionalLight, GameObject, PointLight};
use umbra::{cube, plane};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ctx = WgpuContext::new_blocking()?;

    // Offscreen frame target
    let color_texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Demo Color Target"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: COLOR_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let color_view = color_texture.create_view(&wgpu::TextureViewDescriptor::default());
    let depth_view = ctx.create_depth_texture(WIDTH, HEIGHT);

    // Scene: shared geometry/texture, two objects
    let cube_mesh = Arc::new(cube());
    let ground_mesh = Arc::new(plane(30.0));
    let white = Arc::new(Texture::white(&ctx));

    let cube_gpu = GpuMesh::new(&ctx, &cube_mesh, "Cube");
    let ground_gpu = GpuMesh::new(&ctx, &ground_mesh, "Ground");

    let mut cube_object = GameObject::new(Arc::clone(&cube_mesh), Arc::clone(&white));
    cube_object.set_position(Vec3::new(0.0, 2.0, 0.0));
    cube_object.set_scale_uniform(1.5);

    let ground_object = GameObject::new(Arc::clone(&ground_mesh), Arc::clone(&white));

    // Lights
    let sun = DirectionalLight::new(Vec3::ONE, Vec3::new(-0.4, -1.0, -0.3), 1.2);
    let lamp = PointLight::with_range(Vec3::new(4.0, 3.0, 4.0), Vec3::new(1.0, 0.8, 0.6), 2.0, 25.0);

    let camera = CameraMatrices {
        view: Mat4::look_at_rh(Vec3::new(6.0, 5.0, 8.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
        projection: Mat4::perspective_rh(
            45f32.to_radians(),
            WIDTH as f32 / HEIGHT as f32,
            0.1,
            100.0,
        ),
        position: Vec3::new(6.0, 5.0, 8.0),
    };

    let mut renderer = Renderer::new(&ctx, COLOR_FORMAT, &ShadowMapConfig::default())?;

    for frame in 0..8 {
        cube_object.rotate_axis_angle(Vec3::Y, 0.2);

        let items = [
            DrawItem {
                mesh: &cube_gpu,
                texture: &white,
                model_matrix: cube_object.model_matrix(),
            },
            DrawItem {
                mesh: &ground_gpu,
                texture: &white,
                model_matrix: ground_object.model_matrix(),
            },
        ];

        renderer.render(
            &ctx,
            &color_view,
            &depth_view,
            WIDTH,
            HEIGHT,
            &camera,
            &sun,
            std::slice::from_ref(&lamp),
            &items,
        )?;

        log::info!(
            "frame {frame}: viewport restored to {}x{}",
            renderer.shadow_map().viewport().width,
            renderer.shadow_map().viewport().height,
        );
    }

    // Explicit shutdown: GPU meshes and the shadow map are released once
    renderer.cleanup();
    cube_gpu.cleanup();
    ground_gpu.cleanup();

    log::info!("done");
    Ok(())
}
