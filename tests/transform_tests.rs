//! Transform tests
//!
//! Tests for:
//! - TRS defaults and the derived model matrix
//! - Axis-angle rotation setters
//! - Incremental rotation composition order (new = old ∘ delta)
//! - Permissive scale handling

use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use umbra::scene::Transform;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    // q and -q describe the same orientation
    a.dot(b).abs() > 1.0 - EPSILON
}

// ============================================================================
// Defaults and Model Matrix
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert!(t.model_matrix().abs_diff_eq(Mat4::IDENTITY, EPSILON));
}

#[test]
fn model_matrix_maps_origin_to_position() {
    let mut t = Transform::new();
    t.position = Vec3::new(2.0, 0.0, 0.0);

    let world = t.model_matrix().transform_point3(Vec3::ZERO);
    assert!(vec3_approx(world, Vec3::new(2.0, 0.0, 0.0)));
}

#[test]
fn model_matrix_is_translate_rotate_scale() {
    let mut t = Transform::new();
    t.position = Vec3::new(1.0, 2.0, 3.0);
    t.set_rotation_axis_angle(Vec3::Y, FRAC_PI_2);
    t.scale = Vec3::splat(2.0);

    // Local +X: scaled to (2,0,0), rotated about Y to (0,0,-2), translated
    let world = t.model_matrix().transform_point3(Vec3::X);
    assert!(vec3_approx(world, Vec3::new(1.0, 2.0, 1.0)));
}

#[test]
fn model_matrix_recomputes_after_mutation() {
    let mut t = Transform::new();
    t.position = Vec3::new(5.0, 0.0, 0.0);
    let first = t.model_matrix();

    t.position = Vec3::new(0.0, 5.0, 0.0);
    let second = t.model_matrix();

    assert!(!first.abs_diff_eq(second, EPSILON));
    assert!(vec3_approx(
        second.transform_point3(Vec3::ZERO),
        Vec3::new(0.0, 5.0, 0.0)
    ));
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn set_rotation_replaces_orientation() {
    let mut t = Transform::new();
    t.set_rotation_axis_angle(Vec3::Y, FRAC_PI_2);
    t.set_rotation_axis_angle(Vec3::X, FRAC_PI_4);

    let expected = Quat::from_axis_angle(Vec3::X, FRAC_PI_4);
    assert!(quat_approx(t.rotation, expected));
}

#[test]
fn set_rotation_normalizes_axis() {
    let mut t = Transform::new();
    t.set_rotation_axis_angle(Vec3::new(0.0, 10.0, 0.0), FRAC_PI_2);

    let expected = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
    assert!(quat_approx(t.rotation, expected));
}

#[test]
fn incremental_rotation_composes_in_call_order() {
    // rotate(a1); rotate(a2) must equal the mathematical composition
    // q(a1) * q(a2), in that order.
    let mut t = Transform::new();
    t.rotate_axis_angle(Vec3::Y, FRAC_PI_2);
    t.rotate_axis_angle(Vec3::X, FRAC_PI_4);

    let expected =
        Quat::from_axis_angle(Vec3::Y, FRAC_PI_2) * Quat::from_axis_angle(Vec3::X, FRAC_PI_4);
    assert!(quat_approx(t.rotation, expected));
}

#[test]
fn incremental_rotation_order_matters() {
    let mut ab = Transform::new();
    ab.rotate_axis_angle(Vec3::Y, FRAC_PI_2);
    ab.rotate_axis_angle(Vec3::X, FRAC_PI_2);

    let mut ba = Transform::new();
    ba.rotate_axis_angle(Vec3::X, FRAC_PI_2);
    ba.rotate_axis_angle(Vec3::Y, FRAC_PI_2);

    assert!(!quat_approx(ab.rotation, ba.rotation));
}

#[test]
fn incremental_rotation_stays_normalized() {
    let mut t = Transform::new();
    for _ in 0..1000 {
        t.rotate_axis_angle(Vec3::new(1.0, 1.0, 0.0), 0.013);
    }
    assert!((t.rotation.length() - 1.0).abs() < 1e-4);
}

// ============================================================================
// Scale
// ============================================================================

#[test]
fn scale_is_not_validated() {
    // Zero and negative scale are accepted; the matrix degenerates and
    // that is the caller's problem.
    let mut t = Transform::new();
    t.scale = Vec3::new(0.0, -1.0, 2.0);

    let m = t.model_matrix();
    assert!(vec3_approx(
        m.transform_vector3(Vec3::ONE),
        Vec3::new(0.0, -1.0, 2.0)
    ));
}

#[test]
fn non_uniform_scale_applies_per_axis() {
    let mut t = Transform::new();
    t.scale = Vec3::new(2.0, 3.0, 4.0);

    let m = t.model_matrix();
    assert!(vec3_approx(
        m.transform_point3(Vec3::ONE),
        Vec3::new(2.0, 3.0, 4.0)
    ));
}
