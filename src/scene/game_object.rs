use std::sync::Arc;

use glam::{Mat4, Vec3};
use uuid::Uuid;

use crate::renderer::Texture;
use crate::resources::Mesh;
use crate::scene::Transform;

/// A positioned, textured mesh instance in the scene.
///
/// The object references its mesh and texture, it does not own them: both
/// are shared read-only via `Arc`, so many objects can reuse the same
/// geometry and image, and dropping an object never frees shared resources.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: Uuid,
    mesh: Arc<Mesh>,
    texture: Arc<Texture>,
    pub transform: Transform,
}

impl GameObject {
    #[must_use]
    pub fn new(mesh: Arc<Mesh>, texture: Arc<Texture>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mesh,
            texture,
            transform: Transform::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    #[inline]
    #[must_use]
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Replaces the orientation with a single axis-angle rotation.
    pub fn set_rotation_axis_angle(&mut self, axis: Vec3, angle: f32) {
        self.transform.set_rotation_axis_angle(axis, angle);
    }

    /// Rotates incrementally in the object's local frame
    /// (`new = current ∘ delta`).
    pub fn rotate_axis_angle(&mut self, axis: Vec3, angle: f32) {
        self.transform.rotate_axis_angle(axis, angle);
    }

    /// Per-axis scale. Not validated — degenerate values are the caller's
    /// responsibility.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Uniform scale shorthand.
    pub fn set_scale_uniform(&mut self, scale: f32) {
        self.transform.scale = Vec3::splat(scale);
    }

    /// The object's world-space model matrix, derived on demand.
    #[inline]
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.model_matrix()
    }
}
