#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_shape(kind: ShapeKind, x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape {
        id: Uuid::new_v4(),
        kind,
        x,
        y,
        width: w,
        height: h,
        name: String::new(),
        visible: true,
        locked: false,
    }
}

fn make_pin(kind: PinKind) -> Pin {
    Pin {
        id: Uuid::new_v4(),
        kind,
        x: 10.0,
        y: 20.0,
        linked_id: "SI-001".into(),
        name: String::new(),
        visible: true,
        locked: false,
    }
}

// =============================================================
// ShapeKind / PinKind
// =============================================================

#[test]
fn shape_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ShapeKind::Cloud).unwrap(), json!("cloud"));
    assert_eq!(serde_json::from_value::<ShapeKind>(json!("ellipse")).unwrap(), ShapeKind::Ellipse);
}

#[test]
fn pin_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(PinKind::Safety).unwrap(), json!("safety"));
}

#[test]
fn shape_kind_labels() {
    assert_eq!(ShapeKind::Box.label(), "Box");
    assert_eq!(ShapeKind::Ellipse.label(), "Ellipse");
    assert_eq!(ShapeKind::Cloud.label(), "Cloud");
}

// =============================================================
// Shape
// =============================================================

#[test]
fn shape_rect_roundtrips_through_set_rect() {
    let mut s = make_shape(ShapeKind::Box, 1.0, 2.0, 3.0, 4.0);
    assert_eq!(s.rect(), PctRect::new(1.0, 2.0, 3.0, 4.0));
    s.set_rect(PctRect::new(5.0, 6.0, 7.0, 8.0));
    assert_eq!((s.x, s.y, s.width, s.height), (5.0, 6.0, 7.0, 8.0));
}

#[test]
fn shape_deserialize_defaults_visibility_and_lock() {
    let id = Uuid::new_v4();
    let s: Shape = serde_json::from_value(json!({
        "id": id, "kind": "box", "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0, "name": "Box 1"
    }))
    .unwrap();
    assert!(s.visible);
    assert!(!s.locked);
}

// =============================================================
// DocStore: snapshots
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = DocStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn store_load_snapshot_replaces_contents() {
    let mut store = DocStore::new();
    store.push_shape(make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0));
    let fresh = make_shape(ShapeKind::Cloud, 0.0, 0.0, 5.0, 5.0);
    let fresh_id = fresh.id;
    store.load_snapshot(vec![fresh], vec![make_pin(PinKind::Photo)]);
    assert_eq!(store.shapes().len(), 1);
    assert_eq!(store.shapes()[0].id, fresh_id);
    assert_eq!(store.pins().len(), 1);
}

#[test]
fn store_load_snapshot_json_parses_shapes_and_pins() {
    let mut store = DocStore::new();
    let json = json!({
        "shapes": [
            { "id": Uuid::new_v4(), "kind": "ellipse", "x": 10.0, "y": 10.0, "width": 5.0, "height": 5.0, "name": "Ellipse 1" }
        ],
        "pins": [
            { "id": Uuid::new_v4(), "kind": "punch", "x": 50.0, "y": 50.0, "linked_id": "P-7" }
        ]
    })
    .to_string();
    store.load_snapshot_json(&json).unwrap();
    assert_eq!(store.shapes()[0].kind, ShapeKind::Ellipse);
    assert_eq!(store.pins()[0].linked_id, "P-7");
    assert!(store.pins()[0].visible);
}

#[test]
fn store_load_snapshot_json_missing_sections_default_empty() {
    let mut store = DocStore::new();
    store.push_pin(make_pin(PinKind::Photo));
    store.load_snapshot_json("{}").unwrap();
    assert!(store.is_empty());
}

#[test]
fn store_load_snapshot_json_invalid_leaves_store_untouched() {
    let mut store = DocStore::new();
    store.push_shape(make_shape(ShapeKind::Box, 0.0, 0.0, 2.0, 2.0));
    let err = store.load_snapshot_json("{ not json").unwrap_err();
    assert!(matches!(err, DocError::InvalidSnapshot(_)));
    assert!(err.to_string().starts_with("invalid snapshot"));
    assert_eq!(store.shapes().len(), 1);
}

// =============================================================
// DocStore: lookups and mutation
// =============================================================

#[test]
fn store_preserves_insertion_order() {
    let mut store = DocStore::new();
    let a = make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0);
    let b = make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0);
    let (id_a, id_b) = (a.id, b.id);
    store.push_shape(a);
    store.push_shape(b);
    let ids: Vec<_> = store.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![id_a, id_b]);
}

#[test]
fn store_shape_mut_updates_in_place() {
    let mut store = DocStore::new();
    let s = make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0);
    let id = s.id;
    store.push_shape(s);
    store.shape_mut(&id).unwrap().x = 42.0;
    assert_eq!(store.shape(&id).unwrap().x, 42.0);
}

#[test]
fn store_missing_lookups_are_none() {
    let mut store = DocStore::new();
    assert!(store.shape(&Uuid::new_v4()).is_none());
    assert!(store.pin_mut(&Uuid::new_v4()).is_none());
}

#[test]
fn store_remove_shapes_counts_removed() {
    let mut store = DocStore::new();
    let a = make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0);
    let b = make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0);
    let keep = make_shape(ShapeKind::Cloud, 0.0, 0.0, 1.0, 1.0);
    let ids = vec![a.id, b.id, Uuid::new_v4()];
    let keep_id = keep.id;
    store.push_shape(a);
    store.push_shape(keep);
    store.push_shape(b);
    assert_eq!(store.remove_shapes(&ids), 2);
    assert_eq!(store.shapes().len(), 1);
    assert_eq!(store.shapes()[0].id, keep_id);
}

#[test]
fn store_remove_pin_returns_pin() {
    let mut store = DocStore::new();
    let pin = make_pin(PinKind::Safety);
    let id = pin.id;
    store.push_pin(pin);
    assert_eq!(store.remove_pin(&id).map(|p| p.id), Some(id));
    assert!(store.remove_pin(&id).is_none());
}

#[test]
fn store_clear_empties_everything() {
    let mut store = DocStore::new();
    store.push_shape(make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0));
    store.push_pin(make_pin(PinKind::Punch));
    assert_eq!(store.len(), 2);
    store.clear();
    assert!(store.is_empty());
}

// =============================================================
// DocStore: default names
// =============================================================

#[test]
fn next_shape_name_counts_per_kind() {
    let mut store = DocStore::new();
    assert_eq!(store.next_shape_name(ShapeKind::Box), "Box 1");
    store.push_shape(make_shape(ShapeKind::Box, 0.0, 0.0, 1.0, 1.0));
    store.push_shape(make_shape(ShapeKind::Cloud, 0.0, 0.0, 1.0, 1.0));
    assert_eq!(store.next_shape_name(ShapeKind::Box), "Box 2");
    assert_eq!(store.next_shape_name(ShapeKind::Cloud), "Cloud 2");
    assert_eq!(store.next_shape_name(ShapeKind::Ellipse), "Ellipse 1");
}

#[test]
fn next_pin_name_counts_per_kind() {
    let mut store = DocStore::new();
    store.push_pin(make_pin(PinKind::Photo));
    assert_eq!(store.next_pin_name(PinKind::Photo), "Photo 2");
    assert_eq!(store.next_pin_name(PinKind::Punch), "Punch 1");
}
