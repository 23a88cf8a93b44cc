use glam::{Mat4, Vec3};
use uuid::Uuid;

// ============================================================================
// Directional Light
// ============================================================================

/// Near plane of the directional shadow projection.
pub const SHADOW_ORTHO_NEAR: f32 = -20.0;
/// Far plane of the directional shadow projection.
pub const SHADOW_ORTHO_FAR: f32 = 20.0;

/// Default half-extent of the orthographic shadow box.
pub const DEFAULT_ORTHO_EXTENT: f32 = 10.0;
/// Default multiplier for the virtual light camera's distance from the origin.
pub const DEFAULT_POSITION_MULTIPLIER: f32 = 10.0;

/// A parallel light with an orthographic shadow projection.
///
/// The direction is stored normalized — every mutation re-normalizes — and
/// the intensity is clamped to be non-negative. The shadow projection covers
/// a fixed working volume around the origin: it is not derived from scene
/// bounds, so very large scenes will clip shadows at the ortho box.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    id: Uuid,
    color: Vec3,
    direction: Vec3,
    intensity: f32,
    ortho_extent: f32,
    position_multiplier: f32,
}

impl DirectionalLight {
    /// Creates a directional light with the default shadow projection
    /// parameters (half-extent 10, position multiplier 10).
    #[must_use]
    pub fn new(color: Vec3, direction: Vec3, intensity: f32) -> Self {
        Self::with_shadow_params(
            color,
            direction,
            intensity,
            DEFAULT_ORTHO_EXTENT,
            DEFAULT_POSITION_MULTIPLIER,
        )
    }

    /// Creates a directional light with explicit shadow projection
    /// parameters.
    #[must_use]
    pub fn with_shadow_params(
        color: Vec3,
        direction: Vec3,
        intensity: f32,
        ortho_extent: f32,
        position_multiplier: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            color: color.max(Vec3::ZERO),
            direction: safe_normalize(direction),
            intensity: intensity.max(0.0),
            ortho_extent,
            position_multiplier,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Color components are clamped to `[0, ∞)`.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color.max(Vec3::ZERO);
    }

    /// Always a unit vector.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Re-normalizes on every set; a zero vector falls back to straight
    /// down.
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = safe_normalize(direction);
    }

    #[inline]
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Clamped to be non-negative.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.max(0.0);
    }

    #[inline]
    #[must_use]
    pub fn ortho_extent(&self) -> f32 {
        self.ortho_extent
    }

    #[inline]
    #[must_use]
    pub fn position_multiplier(&self) -> f32 {
        self.position_multiplier
    }

    /// Orthographic shadow projection: a symmetric box of half-extent
    /// [`ortho_extent`](Self::ortho_extent) in X/Y, near −20, far 20.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let e = self.ortho_extent;
        Mat4::orthographic_rh(-e, e, -e, e, SHADOW_ORTHO_NEAR, SHADOW_ORTHO_FAR)
    }

    /// View matrix of the virtual light camera.
    ///
    /// The camera sits at `-direction * position_multiplier` looking at the
    /// origin. Up is +Y unless the direction is within 0.01 of vertical
    /// (`|direction.y| > 0.99`), in which case +X is used so the look-at
    /// basis never degenerates.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let eye = -self.direction * self.position_multiplier;
        let up = if self.direction.y.abs() > 0.99 {
            Vec3::X
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(eye, Vec3::ZERO, up)
    }

    /// `projection · view`: transforms world space into the shadow map's
    /// depth space. Used both to render the depth pre-pass and to sample
    /// the shadow map in the color pass.
    #[must_use]
    pub fn light_space_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

// ============================================================================
// Point Light
// ============================================================================

/// Distance falloff coefficients for a point light.
///
/// The factor at distance `d` is `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    #[must_use]
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Derives coefficients calibrated so the light's contribution is
    /// near-negligible (~1%) at `range` units.
    ///
    /// Uses the classic falloff-table fit `linear = 4.5/r`,
    /// `quadratic = 75/r²`: a larger range yields smaller coefficients and
    /// therefore weaker attenuation at any fixed distance.
    #[must_use]
    pub fn for_range(range: f32) -> Self {
        let r = range.max(f32::EPSILON);
        Self {
            constant: 1.0,
            linear: 4.5 / r,
            quadratic: 75.0 / (r * r),
        }
    }

    /// The attenuation factor at distance `d`.
    ///
    /// Strictly decreasing in `d` for positive coefficients.
    #[must_use]
    pub fn factor_at(&self, distance: f32) -> f32 {
        let d = distance.max(0.0);
        1.0 / (self.constant + self.linear * d + self.quadratic * d * d)
    }
}

impl Default for Attenuation {
    /// Approximates a ~50-unit falloff.
    fn default() -> Self {
        Self::for_range(50.0)
    }
}

/// A positional light with distance attenuation.
///
/// Fields are private; the accessors keep the invariants (non-negative
/// intensity and color) at every mutation site, not only at construction.
#[derive(Debug, Clone)]
pub struct PointLight {
    id: Uuid,
    position: Vec3,
    color: Vec3,
    intensity: f32,
    attenuation: Attenuation,
}

impl PointLight {
    /// Creates a point light with the default ~50-unit attenuation.
    #[must_use]
    pub fn new(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self::with_attenuation(position, color, intensity, Attenuation::default())
    }

    /// Creates a point light with explicit attenuation coefficients.
    #[must_use]
    pub fn with_attenuation(
        position: Vec3,
        color: Vec3,
        intensity: f32,
        attenuation: Attenuation,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            color: color.max(Vec3::ZERO),
            intensity: intensity.max(0.0),
            attenuation,
        }
    }

    /// Creates a point light whose attenuation is derived from an effective
    /// range.
    #[must_use]
    pub fn with_range(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self::with_attenuation(position, color, intensity, Attenuation::for_range(range))
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Color components are clamped to `[0, ∞)`.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color.max(Vec3::ZERO);
    }

    #[inline]
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Clamped to be non-negative.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.max(0.0);
    }

    #[inline]
    #[must_use]
    pub fn attenuation(&self) -> Attenuation {
        self.attenuation
    }

    pub fn set_attenuation(&mut self, attenuation: Attenuation) {
        self.attenuation = attenuation;
    }

    /// The attenuation factor for a fragment at `distance` from the light.
    #[must_use]
    pub fn attenuation_at(&self, distance: f32) -> f32 {
        self.attenuation.factor_at(distance)
    }

    /// Final light contribution at `distance`:
    /// `color · intensity · attenuation`.
    #[must_use]
    pub fn contribution_at(&self, distance: f32) -> Vec3 {
        self.color * self.intensity * self.attenuation_at(distance)
    }
}

fn safe_normalize(direction: Vec3) -> Vec3 {
    direction.try_normalize().unwrap_or(Vec3::NEG_Y)
}
