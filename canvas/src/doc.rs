//! Document model: tray items, placed polygons, and the in-memory store.
//!
//! The tray is an ordered list of unplaced descriptors shown at a fixed size.
//! The workspace is an ordered list of placed polygons; list order is draw
//! order, so the last entry is on top and wins hit tests.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use uuid::Uuid;

use crate::camera::Point;
use crate::polygon::PolygonDescriptor;

/// Unique identifier for a tray item or placed polygon.
pub type ObjectId = Uuid;

/// A descriptor waiting in the tray.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayItem {
    pub id: ObjectId,
    pub descriptor: PolygonDescriptor,
}

impl TrayItem {
    #[must_use]
    pub fn new(descriptor: PolygonDescriptor) -> Self {
        Self { id: Uuid::new_v4(), descriptor }
    }
}

/// A descriptor placed in the workspace at `offset` (logical coordinates of
/// the descriptor's local origin).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPolygon {
    pub id: ObjectId,
    pub descriptor: PolygonDescriptor,
    pub offset: Point,
}

impl PlacedPolygon {
    #[must_use]
    pub fn new(descriptor: PolygonDescriptor, offset: Point) -> Self {
        Self { id: Uuid::new_v4(), descriptor, offset }
    }

    /// SVG `transform` attribute for this shape's group.
    #[must_use]
    pub fn svg_transform(&self) -> String {
        format!("translate({}, {})", self.offset.x, self.offset.y)
    }
}

/// In-memory store for both panes.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    tray: Vec<TrayItem>,
    placed: Vec<PlacedPolygon>,
}

impl DocStore {
    // --- Tray ---

    /// Append a descriptor to the tray, returning the new item's id.
    pub fn push_tray(&mut self, descriptor: PolygonDescriptor) -> ObjectId {
        let item = TrayItem::new(descriptor);
        let id = item.id;
        self.tray.push(item);
        id
    }

    /// Remove every tray item.
    pub fn clear_tray(&mut self) {
        self.tray.clear();
    }

    /// Tray items in display order.
    #[must_use]
    pub fn tray(&self) -> &[TrayItem] {
        &self.tray
    }

    /// Look up a tray item by id.
    #[must_use]
    pub fn tray_item(&self, id: &ObjectId) -> Option<&TrayItem> {
        self.tray.iter().find(|t| t.id == *id)
    }

    // --- Workspace ---

    /// Append a polygon on top of the workspace, returning its id.
    pub fn push_placed(&mut self, descriptor: PolygonDescriptor, offset: Point) -> ObjectId {
        let placed = PlacedPolygon::new(descriptor, offset);
        let id = placed.id;
        self.placed.push(placed);
        id
    }

    /// Placed polygons in draw order (bottom first).
    #[must_use]
    pub fn placed(&self) -> &[PlacedPolygon] {
        &self.placed
    }

    /// Look up a placed polygon by id.
    #[must_use]
    pub fn placed_polygon(&self, id: &ObjectId) -> Option<&PlacedPolygon> {
        self.placed.iter().find(|p| p.id == *id)
    }

    /// Move a placed polygon. Returns false if it doesn't exist.
    pub fn set_offset(&mut self, id: &ObjectId, offset: Point) -> bool {
        let Some(placed) = self.placed.iter_mut().find(|p| p.id == *id) else {
            return false;
        };
        placed.offset = offset;
        true
    }

    // --- Whole store ---

    /// Replace both panes with restored contents.
    pub fn load(&mut self, tray: Vec<PolygonDescriptor>, placed: Vec<(PolygonDescriptor, Point)>) {
        self.tray = tray.into_iter().map(TrayItem::new).collect();
        self.placed = placed
            .into_iter()
            .map(|(descriptor, offset)| PlacedPolygon::new(descriptor, offset))
            .collect();
    }

    /// Empty both panes.
    pub fn clear(&mut self) {
        self.tray.clear();
        self.placed.clear();
    }

    /// Returns `true` if neither pane holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tray.is_empty() && self.placed.is_empty()
    }
}
