#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{DocStore, ObjectId, PlacedPolygon};

/// Return the topmost placed polygon containing `world_pt`, if any.
///
/// Shapes are tested from the top of the draw order down. A shape whose
/// vertices fail to parse is never hit.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &DocStore) -> Option<ObjectId> {
    doc.placed()
        .iter()
        .rev()
        .find(|placed| contains(placed, world_pt))
        .map(|placed| placed.id)
}

/// Whether `world_pt` lies inside `placed` (even-odd rule).
#[must_use]
pub fn contains(placed: &PlacedPolygon, world_pt: Point) -> bool {
    let Ok(vertices) = placed.descriptor.vertices() else {
        return false;
    };
    let local = Point::new(world_pt.x - placed.offset.x, world_pt.y - placed.offset.y);
    point_in_polygon(local, &vertices)
}

/// Ray-cast point-in-polygon test. Fewer than three vertices never contain a point.
#[must_use]
pub fn point_in_polygon(pt: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[j];
        if (a.y > pt.y) != (b.y > pt.y) {
            let cross_x = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
            if pt.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
