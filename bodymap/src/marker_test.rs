#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn saved(id: MarkerId, x: f64, y: f64, view: BodyView) -> Marker {
    Marker { id, x_position: x, y_position: y, view, status: WoundStatus::Active }
}

fn saved_by_id(store: &MarkerStore, id: MarkerId) -> Option<&Marker> {
    store.saved().iter().find(|m| m.id == id)
}

fn temp(x: f64, y: f64, view: BodyView) -> TempMarker {
    TempMarker::new(Point::new(x, y), AreaCode::Chest, "Sternum", view)
}

// =============================================================
// Marker (de)serialization
// =============================================================

#[test]
fn marker_deserializes_from_records_store_shape() {
    let value = json!({
        "id": 42,
        "xPosition": 120.5,
        "yPosition": 300.0,
        "view": "BACK",
        "status": "HEALING"
    });
    let marker: Marker = serde_json::from_value(value).expect("marker");
    assert_eq!(marker.id, 42);
    assert_eq!(marker.x_position, 120.5);
    assert_eq!(marker.y_position, 300.0);
    assert_eq!(marker.view, BodyView::Back);
    assert_eq!(marker.status, WoundStatus::Healing);
}

#[test]
fn marker_status_defaults_to_active() {
    let value = json!({ "id": 1, "xPosition": 0.0, "yPosition": 0.0, "view": "FRONT" });
    let marker: Marker = serde_json::from_value(value).expect("marker");
    assert_eq!(marker.status, WoundStatus::Active);
}

#[test]
fn marker_rejects_unknown_view() {
    let value = json!({ "id": 1, "xPosition": 0.0, "yPosition": 0.0, "view": "SIDE" });
    assert!(serde_json::from_value::<Marker>(value).is_err());
}

#[test]
fn temp_marker_serializes_zone_code() {
    let marker = temp(10.0, 20.0, BodyView::Front);
    let value = serde_json::to_value(&marker).expect("serialize");
    assert_eq!(value["zoneCode"], "CHEST");
    assert_eq!(value["label"], "Sternum");
    assert_eq!(value["x"], 10.0);
}

#[test]
fn temp_markers_get_distinct_keys() {
    let a = temp(1.0, 1.0, BodyView::Front);
    let b = temp(1.0, 1.0, BodyView::Front);
    assert_ne!(a.key, b.key);
}

// =============================================================
// MapMarker
// =============================================================

#[test]
fn pending_location_and_view() {
    let pending = MapMarker::Pending(temp(5.0, 6.0, BodyView::Front));
    assert_eq!(pending.location(), Point::new(5.0, 6.0));
    assert_eq!(pending.view(), BodyView::Front);
}

#[test]
fn saved_location_and_view() {
    let marker = MapMarker::Saved(saved(7, 5.0, 6.0, BodyView::Back));
    assert_eq!(marker.location(), Point::new(5.0, 6.0));
    assert_eq!(marker.view(), BodyView::Back);
}

#[test]
fn map_marker_serializes_with_state_tag() {
    let value = serde_json::to_value(MapMarker::Saved(saved(3, 1.0, 2.0, BodyView::Front))).expect("serialize");
    assert_eq!(value["state"], "saved");
    assert_eq!(value["id"], 3);
}

// =============================================================
// MarkerStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = MarkerStore::new();
    assert!(store.saved().is_empty());
    assert!(store.pending().is_none());
}

#[test]
fn load_replaces_snapshot() {
    let mut store = MarkerStore::new();
    store.load(vec![saved(1, 0.0, 0.0, BodyView::Front)]);
    store.load(vec![saved(2, 0.0, 0.0, BodyView::Front), saved(3, 0.0, 0.0, BodyView::Back)]);
    assert_eq!(store.saved().len(), 2);
    assert!(saved_by_id(&store, 1).is_none());
    assert!(saved_by_id(&store, 3).is_some());
}

#[test]
fn saved_for_filters_by_view() {
    let mut store = MarkerStore::new();
    store.load(vec![saved(1, 0.0, 0.0, BodyView::Front), saved(2, 0.0, 0.0, BodyView::Back)]);
    let front = store.saved_for(BodyView::Front);
    assert_eq!(front.len(), 1);
    assert_eq!(front[0].id, 1);
}

#[test]
fn set_pending_replaces_previous() {
    let mut store = MarkerStore::new();
    store.set_pending(temp(1.0, 1.0, BodyView::Front));
    store.set_pending(temp(2.0, 2.0, BodyView::Front));
    assert_eq!(store.pending().map(|m| m.x), Some(2.0));
}

#[test]
fn discard_pending_clears_it() {
    let mut store = MarkerStore::new();
    store.set_pending(temp(1.0, 1.0, BodyView::Front));
    assert!(store.discard_pending().is_some());
    assert!(store.pending().is_none());
    assert!(store.discard_pending().is_none());
}

#[test]
fn confirm_pending_promotes_to_saved() {
    let mut store = MarkerStore::new();
    store.set_pending(temp(10.0, 20.0, BodyView::Front));
    let previous = store.confirm_pending(saved(9, 10.0, 20.0, BodyView::Front));
    assert!(previous.is_some());
    assert!(store.pending().is_none());
    assert_eq!(saved_by_id(&store, 9).map(|m| m.x_position), Some(10.0));
}

#[test]
fn confirm_pending_replaces_existing_id() {
    let mut store = MarkerStore::new();
    store.load(vec![saved(9, 0.0, 0.0, BodyView::Front)]);
    store.confirm_pending(saved(9, 50.0, 60.0, BodyView::Front));
    assert_eq!(store.saved().len(), 1);
    assert_eq!(saved_by_id(&store, 9).map(|m| m.y_position), Some(60.0));
}

#[test]
fn map_markers_puts_pending_last_and_filters_view() {
    let mut store = MarkerStore::new();
    store.load(vec![saved(1, 0.0, 0.0, BodyView::Front), saved(2, 0.0, 0.0, BodyView::Back)]);
    store.set_pending(temp(3.0, 3.0, BodyView::Front));

    let front = store.map_markers(BodyView::Front);
    assert_eq!(front.len(), 2);
    assert!(matches!(front[0], MapMarker::Saved(ref m) if m.id == 1));
    assert!(matches!(front[1], MapMarker::Pending(_)));

    let back = store.map_markers(BodyView::Back);
    assert_eq!(back.len(), 1);
    assert!(matches!(back[0], MapMarker::Saved(ref m) if m.id == 2));
}
