use super::*;
use crate::polygon::PolygonDescriptor;

fn square() -> PolygonDescriptor {
    PolygonDescriptor {
        points: vec!["20,20".into(), "80,20".into(), "80,80".into(), "20,80".into()],
        color: "red".into(),
    }
}

// =============================================================
// point_in_polygon
// =============================================================

#[test]
fn inside_square() {
    let verts = square().vertices().unwrap();
    assert!(point_in_polygon(Point::new(50.0, 50.0), &verts));
}

#[test]
fn outside_square() {
    let verts = square().vertices().unwrap();
    assert!(!point_in_polygon(Point::new(5.0, 50.0), &verts));
    assert!(!point_in_polygon(Point::new(50.0, 95.0), &verts));
}

#[test]
fn degenerate_polygon_never_hit() {
    let verts = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    assert!(!point_in_polygon(Point::new(5.0, 5.0), &verts));
}

#[test]
fn inside_triangle() {
    let verts = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(0.0, 100.0)];
    assert!(point_in_polygon(Point::new(10.0, 10.0), &verts));
    assert!(!point_in_polygon(Point::new(90.0, 90.0), &verts));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_empty_doc_is_none() {
    let doc = DocStore::default();
    assert!(hit_test(Point::new(50.0, 50.0), &doc).is_none());
}

#[test]
fn hit_accounts_for_offset() {
    let mut doc = DocStore::default();
    let id = doc.push_placed(square(), Point::new(100.0, 200.0));
    assert_eq!(hit_test(Point::new(150.0, 250.0), &doc), Some(id));
    assert!(hit_test(Point::new(50.0, 50.0), &doc).is_none());
}

#[test]
fn hit_prefers_topmost() {
    let mut doc = DocStore::default();
    let _bottom = doc.push_placed(square(), Point::new(0.0, 0.0));
    let top = doc.push_placed(square(), Point::new(10.0, 10.0));
    assert_eq!(hit_test(Point::new(50.0, 50.0), &doc), Some(top));
}

#[test]
fn hit_falls_through_to_lower_shape() {
    let mut doc = DocStore::default();
    let bottom = doc.push_placed(square(), Point::new(0.0, 0.0));
    let _top = doc.push_placed(square(), Point::new(300.0, 300.0));
    assert_eq!(hit_test(Point::new(50.0, 50.0), &doc), Some(bottom));
}

#[test]
fn malformed_shape_is_skipped() {
    let mut doc = DocStore::default();
    let bad = PolygonDescriptor { points: vec!["x".into(), "1,1".into(), "2,2".into()], color: "red".into() };
    doc.push_placed(bad, Point::new(0.0, 0.0));
    assert!(hit_test(Point::new(1.0, 1.0), &doc).is_none());
}
