//! Light model tests
//!
//! Tests for:
//! - DirectionalLight invariants (normalized direction, clamped intensity)
//! - Orthographic shadow projection bounds
//! - Light view matrix, including the vertical-direction up-vector rule
//! - PointLight attenuation monotonicity and range calibration

use glam::{Vec3, Vec3Swizzles};
use umbra::scene::{Attenuation, DirectionalLight, PointLight};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// DirectionalLight Invariants
// ============================================================================

#[test]
fn direction_is_normalized_at_construction() {
    let light = DirectionalLight::new(Vec3::ONE, Vec3::new(0.0, -10.0, 0.0), 1.0);
    assert!(approx(light.direction().length(), 1.0));
    assert!(light.direction().distance(Vec3::NEG_Y) < EPSILON);
}

#[test]
fn direction_is_renormalized_on_every_set() {
    let mut light = DirectionalLight::new(Vec3::ONE, Vec3::NEG_Y, 1.0);
    light.set_direction(Vec3::new(3.0, -4.0, 0.0));
    assert!(approx(light.direction().length(), 1.0));
    assert!(light.direction().distance(Vec3::new(0.6, -0.8, 0.0)) < EPSILON);
}

#[test]
fn zero_direction_falls_back_to_down() {
    let mut light = DirectionalLight::new(Vec3::ONE, Vec3::NEG_Y, 1.0);
    light.set_direction(Vec3::ZERO);
    assert!(light.direction().distance(Vec3::NEG_Y) < EPSILON);
}

#[test]
fn intensity_is_clamped_non_negative() {
    let mut light = DirectionalLight::new(Vec3::ONE, Vec3::NEG_Y, -3.0);
    assert!(approx(light.intensity(), 0.0));

    light.set_intensity(2.5);
    assert!(approx(light.intensity(), 2.5));

    light.set_intensity(-1.0);
    assert!(approx(light.intensity(), 0.0));
}

#[test]
fn color_components_are_clamped_non_negative() {
    let mut light = DirectionalLight::new(Vec3::new(-1.0, 0.5, 2.0), Vec3::NEG_Y, 1.0);
    assert_eq!(light.color(), Vec3::new(0.0, 0.5, 2.0));

    light.set_color(Vec3::new(0.2, -0.3, 0.4));
    assert_eq!(light.color(), Vec3::new(0.2, 0.0, 0.4));
}

// ============================================================================
// Shadow Projection
// ============================================================================

#[test]
fn projection_covers_the_ortho_extent() {
    let light = DirectionalLight::new(Vec3::ONE, Vec3::NEG_Y, 1.0);
    let proj = light.projection_matrix();

    // X/Y edges of the default 10-unit box land on the NDC boundary
    let edge = proj.project_point3(Vec3::new(10.0, 10.0, 0.0));
    assert!(approx(edge.x, 1.0));
    assert!(approx(edge.y, 1.0));

    // Inside the box stays inside
    let inner = proj.project_point3(Vec3::new(5.0, -5.0, 0.0));
    assert!(approx(inner.x, 0.5));
    assert!(approx(inner.y, -0.5));
}

#[test]
fn projection_respects_custom_extent() {
    let light = DirectionalLight::with_shadow_params(Vec3::ONE, Vec3::NEG_Y, 1.0, 20.0, 10.0);
    let edge = light.projection_matrix().project_point3(Vec3::new(20.0, 0.0, 0.0));
    assert!(approx(edge.x, 1.0));
}

#[test]
fn view_matrix_places_eye_against_the_direction() {
    let direction = Vec3::new(1.0, -1.0, 0.0).normalize();
    let light = DirectionalLight::new(Vec3::ONE, direction, 1.0);
    let view = light.view_matrix();

    // The eye at -direction * 10 maps to the view-space origin
    let eye = -direction * 10.0;
    assert!(view.transform_point3(eye).length() < EPSILON);

    // The world origin sits straight ahead at distance 10 (-Z forward)
    let origin = view.transform_point3(Vec3::ZERO);
    assert!(origin.xy().length() < EPSILON);
    assert!(approx(origin.z, -10.0));
}

#[test]
fn straight_down_direction_does_not_degenerate() {
    // |direction.y| > 0.99 triggers the up = +X fallback; the basis stays
    // orthonormal instead of collapsing.
    let light = DirectionalLight::new(Vec3::ONE, Vec3::new(0.0, -1.0, 0.0), 1.0);
    let view = light.view_matrix();

    assert!(view.is_finite());
    assert!(approx(view.determinant().abs(), 1.0));

    // With up = +X, world X maps to the camera's vertical axis
    let up_in_view = view.transform_vector3(Vec3::X);
    assert!(up_in_view.distance(Vec3::Y) < EPSILON);
}

#[test]
fn straight_up_direction_does_not_degenerate() {
    let light = DirectionalLight::new(Vec3::ONE, Vec3::new(0.0, 1.0, 0.0), 1.0);
    let view = light.view_matrix();
    assert!(view.is_finite());
    assert!(approx(view.determinant().abs(), 1.0));
}

#[test]
fn near_vertical_direction_keeps_y_up() {
    // Just inside the 0.99 threshold: the regular +Y up is still safe
    let direction = Vec3::new(0.3, -0.9, 0.0).normalize();
    assert!(direction.y.abs() <= 0.99);

    let light = DirectionalLight::new(Vec3::ONE, direction, 1.0);
    let view = light.view_matrix();
    assert!(view.is_finite());

    // World up keeps a positive vertical component in view space
    assert!(view.transform_vector3(Vec3::Y).y > 0.0);
}

#[test]
fn light_space_matrix_is_projection_times_view() {
    let light = DirectionalLight::new(Vec3::ONE, Vec3::new(1.0, -2.0, 0.5).normalize(), 1.0);
    let expected = light.projection_matrix() * light.view_matrix();
    assert!(light.light_space_matrix().abs_diff_eq(expected, EPSILON));
}

#[test]
fn light_space_matrix_contains_the_origin() {
    let light = DirectionalLight::new(Vec3::ONE, Vec3::new(0.2, -1.0, 0.3).normalize(), 1.0);
    let ndc = light.light_space_matrix().project_point3(Vec3::ZERO);
    assert!(ndc.x.abs() <= 1.0);
    assert!(ndc.y.abs() <= 1.0);
    assert!((0.0..=1.0).contains(&ndc.z));
}

// ============================================================================
// Point Light Attenuation
// ============================================================================

#[test]
fn attenuation_is_strictly_decreasing() {
    let attenuation = Attenuation::default();
    let distances = [0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0];
    for pair in distances.windows(2) {
        assert!(
            attenuation.factor_at(pair[0]) > attenuation.factor_at(pair[1]),
            "attenuation must strictly decrease from d={} to d={}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn attenuation_at_zero_distance_is_inverse_constant() {
    let attenuation = Attenuation::new(2.0, 0.1, 0.01);
    assert!(approx(attenuation.factor_at(0.0), 0.5));
}

#[test]
fn for_range_weakens_with_larger_range() {
    // Larger range ⇒ smaller coefficients ⇒ more light at a fixed distance
    let distances = [1.0, 5.0, 20.0];
    let ranges = [10.0, 25.0, 50.0, 100.0];
    for d in distances {
        for pair in ranges.windows(2) {
            let near = Attenuation::for_range(pair[0]).factor_at(d);
            let far = Attenuation::for_range(pair[1]).factor_at(d);
            assert!(far > near, "range {} should attenuate less than {}", pair[1], pair[0]);
        }
    }
}

#[test]
fn for_range_is_near_negligible_at_range() {
    let range = 50.0;
    let factor = Attenuation::for_range(range).factor_at(range);
    assert!(factor < 0.02, "factor at range should be ~1%, got {factor}");
}

#[test]
fn default_attenuation_approximates_fifty_units() {
    let default = Attenuation::default();
    let fifty = Attenuation::for_range(50.0);
    assert!(approx(default.linear, fifty.linear));
    assert!(approx(default.quadratic, fifty.quadratic));
}

// ============================================================================
// Point Light
// ============================================================================

#[test]
fn point_light_intensity_clamped_at_construction_and_set() {
    let mut light = PointLight::new(Vec3::ZERO, Vec3::ONE, -5.0);
    assert!(approx(light.intensity(), 0.0));

    light.set_intensity(3.0);
    assert!(approx(light.intensity(), 3.0));

    light.set_intensity(-0.1);
    assert!(approx(light.intensity(), 0.0));
}

#[test]
fn point_light_contribution_scales_color_by_attenuated_intensity() {
    let light = PointLight::with_attenuation(
        Vec3::ZERO,
        Vec3::new(1.0, 0.5, 0.25),
        2.0,
        Attenuation::new(1.0, 0.0, 0.0),
    );

    // Constant-only attenuation: factor is 1 everywhere
    let contribution = light.contribution_at(10.0);
    assert!(contribution.distance(Vec3::new(2.0, 1.0, 0.5)) < EPSILON);
}

#[test]
fn point_light_contribution_fades_with_distance() {
    let light = PointLight::with_range(Vec3::ZERO, Vec3::ONE, 1.0, 50.0);
    let near = light.contribution_at(1.0);
    let far = light.contribution_at(40.0);
    assert!(near.x > far.x);
}
