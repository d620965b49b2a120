#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- ViewTransform defaults ---

#[test]
fn transform_default_is_identity() {
    let t = ViewTransform::default();
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.translate_x, 0.0);
    assert_eq!(t.translate_y, 0.0);
}

// --- local_to_screen / screen_to_local ---

#[test]
fn local_to_screen_applies_scale_then_translate() {
    let t = ViewTransform { scale: 2.0, translate_x: 10.0, translate_y: -5.0 };
    let s = t.local_to_screen(Point::new(3.0, 4.0));
    assert!(point_approx_eq(s, Point::new(16.0, 3.0)));
}

#[test]
fn screen_to_local_undoes_transform() {
    let t = ViewTransform { scale: 4.0, translate_x: 20.0, translate_y: 40.0 };
    let local = t.screen_to_local(Point::new(60.0, 80.0));
    assert!(point_approx_eq(local, Point::new(10.0, 10.0)));
}

#[test]
fn local_screen_roundtrip() {
    let t = ViewTransform { scale: 1.7, translate_x: -33.0, translate_y: 12.5 };
    let p = Point::new(123.4, -56.7);
    let back = t.screen_to_local(t.local_to_screen(p));
    assert!(point_approx_eq(back, p));
}

// --- panned ---

#[test]
fn panned_ignores_scale() {
    let t = ViewTransform { scale: 3.0, translate_x: 1.0, translate_y: 2.0 };
    let p = t.panned(10.0, -4.0);
    assert_eq!(p.scale, 3.0);
    assert_eq!(p.translate_x, 11.0);
    assert_eq!(p.translate_y, -2.0);
}

// --- ViewController: zoom_at_point ---

#[test]
fn zoom_at_point_keeps_pivot_content_fixed() {
    let mut view = ViewController::default();
    view.set(ViewTransform { scale: 1.5, translate_x: 40.0, translate_y: -10.0 });
    let pivot = Point::new(320.0, 240.0);
    let before = view.transform().screen_to_local(pivot);

    view.zoom_at_point(pivot, 0.75);

    let after = view.transform().screen_to_local(pivot);
    assert!(approx_eq(view.transform().scale, 2.25));
    assert!(point_approx_eq(before, after));
}

#[test]
fn zoom_at_point_clamps_high() {
    let mut view = ViewController::default();
    view.zoom_at_point(Point::new(0.0, 0.0), 100.0);
    assert_eq!(view.transform().scale, 8.0);
}

#[test]
fn zoom_at_point_clamps_low() {
    let mut view = ViewController::default();
    view.zoom_at_point(Point::new(50.0, 50.0), -100.0);
    assert_eq!(view.transform().scale, 0.2);
}

#[test]
fn zoom_at_point_pivot_fixed_even_when_clamped() {
    let mut view = ViewController::default();
    let pivot = Point::new(100.0, 60.0);
    let before = view.transform().screen_to_local(pivot);
    view.zoom_at_point(pivot, 50.0);
    let after = view.transform().screen_to_local(pivot);
    assert!(point_approx_eq(before, after));
}

// --- ViewController: zoom_step ---

#[test]
fn zoom_step_in_multiplies_by_factor() {
    let mut view = ViewController::default();
    view.zoom_step(ZoomDirection::In, 800.0, 600.0);
    assert!(approx_eq(view.transform().scale, 1.2));
}

#[test]
fn zoom_step_out_divides_by_factor() {
    let mut view = ViewController::default();
    view.zoom_step(ZoomDirection::Out, 800.0, 600.0);
    assert!(approx_eq(view.transform().scale, 1.0 / 1.2));
}

#[test]
fn zoom_step_anchors_at_container_center() {
    let mut view = ViewController::default();
    let center = Point::new(400.0, 300.0);
    let before = view.transform().screen_to_local(center);
    view.zoom_step(ZoomDirection::In, 800.0, 600.0);
    view.zoom_step(ZoomDirection::In, 800.0, 600.0);
    let after = view.transform().screen_to_local(center);
    assert!(point_approx_eq(before, after));
}

#[test]
fn zoom_step_in_never_exceeds_max() {
    let mut view = ViewController::default();
    for _ in 0..50 {
        view.zoom_step(ZoomDirection::In, 800.0, 600.0);
        assert!(view.transform().scale <= 8.0);
    }
    assert_eq!(view.transform().scale, 8.0);
}

#[test]
fn zoom_step_out_never_below_min() {
    let mut view = ViewController::default();
    for _ in 0..50 {
        view.zoom_step(ZoomDirection::Out, 800.0, 600.0);
        assert!(view.transform().scale >= 0.2);
    }
    assert_eq!(view.transform().scale, 0.2);
}

// --- ViewController: reset / pan / set ---

#[test]
fn reset_view_restores_identity() {
    let mut view = ViewController::default();
    view.zoom_step(ZoomDirection::In, 800.0, 600.0);
    view.pan_by(30.0, 40.0);
    view.reset_view();
    assert_eq!(view.transform(), ViewTransform::default());
}

#[test]
fn pan_by_accumulates() {
    let mut view = ViewController::default();
    view.pan_by(5.0, 6.0);
    view.pan_by(-2.0, 1.0);
    let t = view.transform();
    assert_eq!(t.translate_x, 3.0);
    assert_eq!(t.translate_y, 7.0);
    assert_eq!(t.scale, 1.0);
}

#[test]
fn set_clamps_scale() {
    let mut view = ViewController::default();
    view.set(ViewTransform { scale: 20.0, translate_x: 1.0, translate_y: 2.0 });
    let t = view.transform();
    assert_eq!(t.scale, 8.0);
    assert_eq!(t.translate_x, 1.0);
}

#[test]
fn custom_limits_respected() {
    let mut view = ViewController::new(0.5, 2.0, 2.0);
    view.zoom_step(ZoomDirection::In, 100.0, 100.0);
    view.zoom_step(ZoomDirection::In, 100.0, 100.0);
    assert_eq!(view.transform().scale, 2.0);
}
