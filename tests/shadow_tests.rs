//! Shadow map protocol tests
//!
//! Tests for:
//! - PassTracker bind/unbind ordering (the Unbound/BoundForWriting machine)
//! - Viewport install on bind, viewport restore on unbind
//! - Out-of-order calls reported as errors, not panics
//! - Shadow map configuration defaults

use umbra::renderer::{BindState, PassTracker, ShadowMapConfig, Viewport};
use umbra::UmbraError;

const SHADOW_VIEWPORT: Viewport = Viewport {
    width: 2048,
    height: 2048,
};

// ============================================================================
// Bind/Unbind Ordering
// ============================================================================

#[test]
fn tracker_starts_unbound() {
    let tracker = PassTracker::new();
    assert_eq!(tracker.state(), BindState::Unbound);
}

#[test]
fn bind_then_unbind_round_trip() {
    let mut tracker = PassTracker::new();
    tracker.bind(SHADOW_VIEWPORT).unwrap();
    assert_eq!(tracker.state(), BindState::BoundForWriting);

    tracker.unbind(Viewport::new(800, 600)).unwrap();
    assert_eq!(tracker.state(), BindState::Unbound);
}

#[test]
fn double_bind_is_rejected() {
    let mut tracker = PassTracker::new();
    tracker.bind(SHADOW_VIEWPORT).unwrap();

    let result = tracker.bind(SHADOW_VIEWPORT);
    assert!(matches!(
        result,
        Err(UmbraError::InvalidBindState {
            expected: "Unbound",
            actual: "BoundForWriting",
        })
    ));

    // The failed call must not corrupt the state machine
    assert_eq!(tracker.state(), BindState::BoundForWriting);
    tracker.unbind(Viewport::new(800, 600)).unwrap();
}

#[test]
fn unbind_without_bind_is_rejected() {
    let mut tracker = PassTracker::new();
    let result = tracker.unbind(Viewport::new(800, 600));
    assert!(matches!(
        result,
        Err(UmbraError::InvalidBindState {
            expected: "BoundForWriting",
            actual: "Unbound",
        })
    ));
    assert_eq!(tracker.state(), BindState::Unbound);
}

#[test]
fn tracker_supports_repeated_frames() {
    let mut tracker = PassTracker::new();
    for _ in 0..3 {
        tracker.bind(SHADOW_VIEWPORT).unwrap();
        tracker.unbind(Viewport::new(800, 600)).unwrap();
    }
    assert_eq!(tracker.state(), BindState::Unbound);
}

#[test]
fn unused_tracker_drops_cleanly() {
    // Construction followed by drop, with no bind calls, must not fail;
    // cleanup of an unused-but-constructed resource is always safe.
    let tracker = PassTracker::new();
    assert_eq!(tracker.state(), BindState::Unbound);
    drop(tracker);
}

// ============================================================================
// Viewport Tracking
// ============================================================================

#[test]
fn bind_installs_the_shadow_viewport() {
    let mut tracker = PassTracker::new();
    tracker.bind(SHADOW_VIEWPORT).unwrap();
    assert_eq!(tracker.viewport(), SHADOW_VIEWPORT);
}

#[test]
fn unbind_restores_the_main_viewport() {
    let mut tracker = PassTracker::new();
    tracker.bind(SHADOW_VIEWPORT).unwrap();
    tracker.unbind(Viewport::new(800, 600)).unwrap();

    // The active viewport is the main pass size, not the shadow resolution
    assert_eq!(tracker.viewport(), Viewport::new(800, 600));
}

#[test]
fn unbind_uses_the_caller_supplied_size_each_time() {
    // The tracker has no memory of the window size; a resize between
    // frames shows up in the restored viewport.
    let mut tracker = PassTracker::new();

    tracker.bind(SHADOW_VIEWPORT).unwrap();
    tracker.unbind(Viewport::new(800, 600)).unwrap();
    assert_eq!(tracker.viewport(), Viewport::new(800, 600));

    tracker.bind(SHADOW_VIEWPORT).unwrap();
    tracker.unbind(Viewport::new(1920, 1080)).unwrap();
    assert_eq!(tracker.viewport(), Viewport::new(1920, 1080));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn shadow_config_defaults_to_2048() {
    let config = ShadowMapConfig::default();
    assert_eq!(config.resolution, 2048);
}

#[test]
fn shadow_config_resolution_is_overridable() {
    let config = ShadowMapConfig { resolution: 1024 };
    assert_eq!(config.resolution, 1024);
}
