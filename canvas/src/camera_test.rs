#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn view(scale: f64, tx: f64, ty: f64) -> ViewTransform {
    ViewTransform { scale, translate_x: tx, translate_y: ty }
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Defaults ---

#[test]
fn view_default_is_identity() {
    let v = ViewTransform::default();
    assert_eq!(v.scale, 1.0);
    assert_eq!(v.translate_x, 0.0);
    assert_eq!(v.translate_y, 0.0);
}

// --- screen_to_world / world_to_screen ---

#[test]
fn screen_to_world_identity() {
    let v = ViewTransform::default();
    assert!(point_approx_eq(v.screen_to_world(Point::new(50.0, 75.0)), Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_pan_and_scale() {
    let v = view(2.0, 20.0, 10.0);
    let world = v.screen_to_world(Point::new(120.0, 50.0));
    assert!(point_approx_eq(world, Point::new(50.0, 20.0)));
}

#[test]
fn world_to_screen_with_pan_and_scale() {
    let v = view(2.0, 20.0, 10.0);
    let screen = v.world_to_screen(Point::new(50.0, 20.0));
    assert!(point_approx_eq(screen, Point::new(120.0, 50.0)));
}

#[test]
fn conversions_are_inverse() {
    let v = view(0.7, -33.0, 12.5);
    let p = Point::new(17.25, -401.0);
    assert!(point_approx_eq(v.screen_to_world(v.world_to_screen(p)), p));
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_cursor_point_fixed() {
    let mut v = view(1.3, 40.0, -25.0);
    let cursor = Point::new(310.0, 145.0);
    let before = v.screen_to_world(cursor);
    v.zoom_at(cursor, 2.1);
    assert!(approx_eq(v.scale, 2.1));
    assert!(point_approx_eq(v.world_to_screen(before), cursor));
}

#[test]
fn zoom_at_clamps_high() {
    let mut v = ViewTransform::default();
    v.zoom_at(Point::new(0.0, 0.0), 10.0);
    assert_eq!(v.scale, SCALE_MAX);
}

#[test]
fn zoom_at_clamps_low() {
    let mut v = ViewTransform::default();
    v.zoom_at(Point::new(0.0, 0.0), 0.01);
    assert_eq!(v.scale, SCALE_MIN);
}

#[test]
fn zoom_at_limit_leaves_translation_alone() {
    let mut v = view(SCALE_MAX, 12.0, 34.0);
    v.zoom_at(Point::new(200.0, 200.0), SCALE_MAX + 1.0);
    assert!(approx_eq(v.translate_x, 12.0));
    assert!(approx_eq(v.translate_y, 34.0));
}

// --- wheel_zoom ---

#[test]
fn wheel_down_zooms_out_by_fixed_step() {
    let mut v = ViewTransform::default();
    v.wheel_zoom(Point::new(0.0, 0.0), 500.0);
    assert!(approx_eq(v.scale, 0.9));
}

#[test]
fn wheel_up_zooms_in_by_fixed_step() {
    let mut v = ViewTransform::default();
    v.wheel_zoom(Point::new(0.0, 0.0), -3.0);
    assert!(approx_eq(v.scale, 1.1));
}

#[test]
fn wheel_zero_delta_zooms_in() {
    let mut v = ViewTransform::default();
    v.wheel_zoom(Point::new(0.0, 0.0), 0.0);
    assert!(approx_eq(v.scale, 1.1));
}

#[test]
fn wheel_sequence_stays_in_range() {
    let mut v = ViewTransform::default();
    for i in 0..200 {
        let dy = if (i / 37) % 2 == 0 { 1.0 } else { -1.0 };
        v.wheel_zoom(Point::new(f64::from(i), 80.0), dy);
        assert!((SCALE_MIN..=SCALE_MAX).contains(&v.scale), "scale {} out of range", v.scale);
    }
}

// --- clamped ---

#[test]
fn clamped_fixes_out_of_range_scale() {
    assert_eq!(view(9.0, 1.0, 2.0).clamped().scale, SCALE_MAX);
    assert_eq!(view(0.0, 1.0, 2.0).clamped().scale, SCALE_MIN);
}

#[test]
fn clamped_resets_non_finite_values() {
    let v = view(f64::NAN, f64::INFINITY, 5.0).clamped();
    assert_eq!(v.scale, 1.0);
    assert_eq!(v.translate_x, 0.0);
    assert_eq!(v.translate_y, 5.0);
}

// --- serde ---

#[test]
fn serde_uses_camel_case_fields() {
    let json = serde_json::to_value(view(1.5, 10.0, -4.0)).unwrap();
    assert_eq!(json["scale"], 1.5);
    assert_eq!(json["translateX"], 10.0);
    assert_eq!(json["translateY"], -4.0);
}

#[test]
fn svg_transform_format() {
    assert_eq!(view(1.5, 10.0, -4.0).svg_transform(), "translate(10, -4) scale(1.5)");
}
