#![allow(clippy::float_cmp)]

use super::*;
use crate::viewport::{SurfaceMetrics, to_intrinsic_exact};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Construction
// =============================================================

#[test]
fn starts_at_identity_in_classify_mode() {
    let c = ViewportController::default();
    assert_eq!(c.state(), ViewportState::default());
    assert_eq!(c.mode(), Mode::Classify);
    assert!(!c.is_dragging());
}

#[test]
fn initial_zoom_respects_configured_bounds() {
    let config = BodyMapConfig { min_zoom: 2.0, max_zoom: 4.0, ..BodyMapConfig::default() };
    let c = ViewportController::new(&config);
    assert_eq!(c.state().zoom, 2.0);
}

// =============================================================
// Zoom buttons
// =============================================================

#[test]
fn zoom_in_multiplies_by_step() {
    let mut c = ViewportController::default();
    assert!(c.zoom_in());
    assert!(approx(c.state().zoom, 1.2));
}

#[test]
fn zoom_out_divides_by_step() {
    let mut c = ViewportController::default();
    assert!(c.zoom_out());
    assert!(approx(c.state().zoom, 1.0 / 1.2));
}

#[test]
fn zoom_buttons_keep_pan() {
    let mut c = ViewportController::default();
    c.set_pan(40.0, -15.0);
    c.zoom_in();
    assert_eq!(c.state().pan_x, 40.0);
    assert_eq!(c.state().pan_y, -15.0);
}

#[test]
fn repeated_zoom_in_clamps_at_max() {
    let mut c = ViewportController::default();
    for _ in 0..50 {
        c.zoom_in();
        assert!(c.state().zoom <= 5.0);
    }
    assert_eq!(c.state().zoom, 5.0);
    assert!(!c.zoom_in());
}

#[test]
fn repeated_zoom_out_clamps_at_min() {
    let mut c = ViewportController::default();
    for _ in 0..50 {
        c.zoom_out();
        assert!(c.state().zoom >= 0.5);
    }
    assert_eq!(c.state().zoom, 0.5);
    assert!(!c.zoom_out());
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in_by_wheel_factor() {
    let mut c = ViewportController::default();
    assert!(c.wheel(-100.0, pt(0.0, 0.0)));
    assert!(approx(c.state().zoom, 1.1));
}

#[test]
fn wheel_down_zooms_out_by_wheel_factor() {
    let mut c = ViewportController::default();
    assert!(c.wheel(100.0, pt(0.0, 0.0)));
    assert!(approx(c.state().zoom, 0.9));
}

#[test]
fn wheel_zero_delta_is_noop() {
    let mut c = ViewportController::default();
    c.set_pan(5.0, 5.0);
    assert!(!c.wheel(0.0, pt(100.0, 100.0)));
    assert_eq!(c.state(), ViewportState { zoom: 1.0, pan_x: 5.0, pan_y: 5.0 });
}

#[test]
fn wheel_at_origin_keeps_pan_zero() {
    let mut c = ViewportController::default();
    c.wheel(-1.0, pt(0.0, 0.0));
    assert_eq!(c.state().pan_x, 0.0);
    assert_eq!(c.state().pan_y, 0.0);
}

#[test]
fn wheel_adjusts_pan_around_cursor() {
    let mut c = ViewportController::default();
    c.wheel(-1.0, pt(100.0, 200.0));
    // pan' = cursor - (cursor - pan) * 1.1
    assert!(approx(c.state().pan_x, 100.0 - 100.0 * 1.1));
    assert!(approx(c.state().pan_y, 200.0 - 200.0 * 1.1));
}

#[test]
fn wheel_keeps_cursor_point_fixed() {
    let metrics = Some(SurfaceMetrics::new(30.0, 60.0, 256.0, 512.0));
    let mut c = ViewportController::default();
    c.set_pan(-12.0, 7.0);
    let screen = pt(30.0 + 140.0, 60.0 + 333.0);
    let cursor = pt(140.0, 333.0);

    for delta in [-1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0] {
        let before = to_intrinsic_exact(screen, &c.state(), metrics).unwrap();
        c.wheel(delta, cursor);
        let after = to_intrinsic_exact(screen, &c.state(), metrics).unwrap();
        assert!((before.x - after.x).abs() <= 1.0, "x drifted: {before:?} -> {after:?}");
        assert!((before.y - after.y).abs() <= 1.0, "y drifted: {before:?} -> {after:?}");
    }
}

#[test]
fn wheel_clamped_to_same_zoom_leaves_pan() {
    let mut c = ViewportController::default();
    for _ in 0..40 {
        c.wheel(-1.0, pt(10.0, 10.0));
    }
    assert_eq!(c.state().zoom, 5.0);
    let before = c.state();
    assert!(!c.wheel(-1.0, pt(300.0, 300.0)));
    assert_eq!(c.state(), before);
}

#[test]
fn wheel_never_escapes_bounds() {
    let mut c = ViewportController::default();
    for i in 0..200 {
        let delta = if i % 7 < 4 { -1.0 } else { 1.0 };
        c.wheel(delta, pt(50.0, 80.0));
        let z = c.state().zoom;
        assert!((0.5..=5.0).contains(&z), "zoom escaped bounds: {z}");
    }
}

// =============================================================
// Mode & drag
// =============================================================

#[test]
fn toggle_flips_mode() {
    let mut c = ViewportController::default();
    assert_eq!(c.toggle_drag_mode(), Mode::Drag);
    assert_eq!(c.mode(), Mode::Drag);
    assert_eq!(c.toggle_drag_mode(), Mode::Classify);
}

#[test]
fn begin_drag_ignored_in_classify_mode() {
    let mut c = ViewportController::default();
    assert!(!c.begin_drag(pt(10.0, 10.0)));
    assert!(!c.is_dragging());
    assert!(!c.drag(pt(50.0, 50.0)));
    assert_eq!(c.state(), ViewportState::default());
}

#[test]
fn drag_moves_pan_by_pointer_delta() {
    let mut c = ViewportController::default();
    c.set_pan(20.0, 30.0);
    c.toggle_drag_mode();
    assert!(c.begin_drag(pt(100.0, 100.0)));
    assert!(c.drag(pt(130.0, 90.0)));
    assert_eq!(c.state().pan_x, 50.0);
    assert_eq!(c.state().pan_y, 20.0);
    assert!(c.drag(pt(100.0, 100.0)));
    assert_eq!(c.state().pan_x, 20.0);
    assert_eq!(c.state().pan_y, 30.0);
}

#[test]
fn drag_keeps_zoom() {
    let mut c = ViewportController::default();
    c.zoom_in();
    let zoom = c.state().zoom;
    c.toggle_drag_mode();
    c.begin_drag(pt(0.0, 0.0));
    c.drag(pt(80.0, 80.0));
    assert_eq!(c.state().zoom, zoom);
}

#[test]
fn end_drag_stops_following() {
    let mut c = ViewportController::default();
    c.toggle_drag_mode();
    c.begin_drag(pt(0.0, 0.0));
    c.drag(pt(10.0, 10.0));
    assert!(c.end_drag());
    assert!(!c.end_drag());
    assert!(!c.drag(pt(99.0, 99.0)));
    assert_eq!(c.state().pan_x, 10.0);
}

#[test]
fn leaving_drag_mode_cancels_drag() {
    let mut c = ViewportController::default();
    c.toggle_drag_mode();
    c.begin_drag(pt(0.0, 0.0));
    c.toggle_drag_mode();
    assert!(!c.is_dragging());
}

// =============================================================
// Reset & set_pan
// =============================================================

#[test]
fn reset_returns_to_identity() {
    let mut c = ViewportController::default();
    c.zoom_in();
    c.set_pan(99.0, -4.0);
    c.toggle_drag_mode();
    c.begin_drag(pt(1.0, 1.0));
    c.reset();
    assert_eq!(c.state(), ViewportState { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 });
    assert!(!c.is_dragging());
    assert_eq!(c.mode(), Mode::Drag);
}

#[test]
fn set_pan_never_touches_zoom() {
    let mut c = ViewportController::default();
    c.zoom_in();
    c.zoom_in();
    let zoom = c.state().zoom;
    c.set_pan(-300.0, 120.0);
    assert_eq!(c.state().zoom, zoom);
    assert_eq!(c.state().pan_x, -300.0);
    assert_eq!(c.state().pan_y, 120.0);
}

#[test]
fn mode_names_match_serde() {
    for mode in [Mode::Classify, Mode::Drag] {
        assert_eq!(serde_json::to_value(mode).unwrap(), mode.as_str());
    }
}
