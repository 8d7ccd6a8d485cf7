#![allow(clippy::float_cmp)]

use super::*;
use bodymap::marker::WoundStatus;

fn marker(id: i64, x: f64, y: f64, view: BodyView) -> Marker {
    Marker { id, x_position: x, y_position: y, view, status: WoundStatus::Active }
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_reports_both_granularities() {
    let out = classify(&BodyMapConfig::default(), Point::new(256.0, 440.0), BodyView::Back, None);
    assert_eq!(out["zone"], "SACRUM");
    assert_eq!(out["area"], "SACRUM");
    assert_eq!(out["label"], "Sacrum");
    assert_eq!(out["granularity"], "coarse");
    assert_eq!(out["view"], "BACK");
    assert_eq!(out["inDiagram"], true);
}

#[test]
fn classify_granularity_override_selects_label() {
    let out = classify(&BodyMapConfig::default(), Point::new(256.0, 100.0), BodyView::Front, Some(Granularity::Fine));
    assert_eq!(out["zone"], "Nez");
    assert_eq!(out["area"], "FACE");
}

#[test]
fn classify_flags_points_outside_diagram() {
    let out = classify(&BodyMapConfig::default(), Point::new(-5.0, 2000.0), BodyView::Front, None);
    assert_eq!(out["inDiagram"], false);
    assert!(out["zone"].is_string());
}

// =============================================================
// regions
// =============================================================

#[test]
fn regions_are_in_priority_order() {
    let out = regions(BodyView::Front, Granularity::Coarse).unwrap();
    let list = out.as_array().unwrap();
    assert!(!list.is_empty());
    let priorities: Vec<u64> = list.iter().map(|r| r["priority"].as_u64().unwrap()).collect();
    assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
    assert!(list.iter().all(|r| r["view"] == "FRONT"));
}

#[test]
fn fine_regions_carry_labels() {
    let out = regions(BodyView::Back, Granularity::Fine).unwrap();
    assert!(out.as_array().unwrap().iter().any(|r| r["area"] == "Sacrum"));
}

// =============================================================
// project
// =============================================================

#[test]
fn project_identity_viewport_covers_whole_diagram() {
    let metrics = SurfaceMetrics::new(10.0, 20.0, 256.0, 512.0);
    let out = project(&BodyMapConfig::default(), ViewportState::default(), metrics, Some(Point::new(10.0, 20.0))).unwrap();
    assert_eq!(out["visible"]["width"], 512.0);
    assert_eq!(out["visible"]["height"], 1024.0);
    assert_eq!(out["intrinsic"]["x"], 0.0);
    assert_eq!(out["intrinsic"]["y"], 0.0);
    let frame_width = out["overview"]["frame"]["width"].as_f64().unwrap();
    assert!((frame_width - 96.0).abs() < 1e-9);
}

#[test]
fn project_rejects_unmeasurable_surface() {
    let metrics = SurfaceMetrics::new(0.0, 0.0, 0.0, 512.0);
    let err = project(&BodyMapConfig::default(), ViewportState::default(), metrics, None).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
}

// =============================================================
// near
// =============================================================

#[test]
fn near_filters_by_radius_and_view() {
    let markers = [
        marker(1, 100.0, 100.0, BodyView::Front),
        marker(2, 110.0, 100.0, BodyView::Front),
        marker(3, 100.0, 100.0, BodyView::Back),
        marker(4, 300.0, 300.0, BodyView::Front),
    ];
    let out = near(&BodyMapConfig::default(), &markers, Point::new(108.0, 100.0), Some(BodyView::Front), None);
    let ids: Vec<i64> = out["markers"].as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(out["radius"], 30.0);
}

#[test]
fn near_radius_override_is_inclusive() {
    let markers = [marker(1, 10.0, 0.0, BodyView::Front)];
    let out = near(&BodyMapConfig::default(), &markers, Point::new(0.0, 0.0), None, Some(10.0));
    assert_eq!(out["markers"].as_array().unwrap().len(), 1);
}
