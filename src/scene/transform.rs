use glam::{Mat4, Quat, Vec3};

/// TRS transform component.
///
/// Holds position, rotation (unit quaternion) and non-uniform scale. The
/// model matrix is derived on demand from the current values — there is no
/// cache and no dirty tracking, so there is nothing to invalidate.
///
/// Scale is intentionally unvalidated: zero or negative components are
/// accepted and will degenerate the matrix. Callers own that decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Sets the rotation to a single axis-angle rotation, replacing the
    /// current orientation. The axis is normalized here.
    pub fn set_rotation_axis_angle(&mut self, axis: Vec3, angle: f32) {
        self.rotation = Quat::from_axis_angle(axis.normalize(), angle);
    }

    /// Applies an incremental axis-angle rotation on top of the current
    /// orientation.
    ///
    /// Order matters: the result is `current ∘ delta` (post-multiplication),
    /// i.e. the delta rotates in the object's local frame.
    pub fn rotate_axis_angle(&mut self, axis: Vec3, angle: f32) {
        let delta = Quat::from_axis_angle(axis.normalize(), angle);
        self.rotation = (self.rotation * delta).normalize();
    }

    /// The model matrix: `translate(position) · rotate(rotation) · scale(scale)`.
    ///
    /// Maps local coordinates into world space. Recomputed on every call.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
