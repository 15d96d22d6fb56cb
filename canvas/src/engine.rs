use rand::Rng;

use crate::camera::{Point, ViewTransform};
use crate::consts::{MAX_TRAY_ITEMS, MIN_TRAY_ITEMS};
use crate::doc::{DocStore, ObjectId};
use crate::hit;
use crate::input::{Button, DropTarget, InputState, WheelDelta};
use crate::payload::{self, PayloadError};
use crate::persist::{self, KeyValueStore, PersistError, PersistedPlacement, PersistedState};
use crate::polygon::{self, PolygonDescriptor};
use crate::render::centered_offset;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor shown while panning.
pub const CURSOR_GRABBING: &str = "grabbing";
/// Cursor shown when no gesture is active.
pub const CURSOR_DEFAULT: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view or a placed shape changed; redraw the workspace.
    RenderNeeded,
    /// Set the workspace element's CSS cursor.
    SetCursor(String),
}

/// Core engine state: everything the widget knows, with no DOM attached.
///
/// The host owns one of these, forwards input events to the `on_*` handlers,
/// and renders from `doc`, `view`, and the viewport size.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub doc: DocStore,
    pub view: ViewTransform,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the workspace element's size in CSS pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
    }

    // --- Tray ---

    /// Replace the tray with a random number of fresh polygons
    /// (uniform in `MIN_TRAY_ITEMS..=MAX_TRAY_ITEMS`). Returns the count.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let count = rng.random_range(MIN_TRAY_ITEMS..=MAX_TRAY_ITEMS);
        self.fill_tray(rng, count);
        count
    }

    /// Replace the tray with exactly `count` fresh polygons.
    pub fn fill_tray<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.doc.clear_tray();
        for _ in 0..count {
            self.doc.push_tray(polygon::generate(rng));
        }
    }

    /// Remove every tray item.
    pub fn clear_tray(&mut self) {
        self.doc.clear_tray();
    }

    /// Drag data for a tray item. Placed polygons move by pointer gesture
    /// and are never drag sources.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::UnknownSource`] if `id` is not in the tray.
    pub fn drag_payload(&self, id: &ObjectId) -> Result<String, PayloadError> {
        let item = self.doc.tray_item(id).ok_or(PayloadError::UnknownSource(*id))?;
        payload::encode(&item.descriptor)
    }

    // --- Pointer input ---

    /// Start panning or dragging depending on what is under the pointer.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let world = self.view.screen_to_world(screen_pt);
        if let Some(id) = hit::hit_test(world, &self.doc) {
            let offset = self
                .doc
                .placed_polygon(&id)
                .map_or(Point::default(), |p| p.offset);
            self.input = InputState::DraggingShape {
                id,
                grab: Point::new(world.x - offset.x, world.y - offset.y),
            };
            return Vec::new();
        }
        let t = self.view.translation();
        self.input = InputState::Panning { anchor: Point::new(screen_pt.x - t.x, screen_pt.y - t.y) };
        vec![Action::SetCursor(CURSOR_GRABBING.to_owned())]
    }

    /// Advance the active gesture.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { anchor } => {
                self.view
                    .set_translation(Point::new(screen_pt.x - anchor.x, screen_pt.y - anchor.y));
                vec![Action::RenderNeeded]
            }
            InputState::DraggingShape { id, grab } => {
                let world = self.view.screen_to_world(screen_pt);
                if self.doc.set_offset(&id, Point::new(world.x - grab.x, world.y - grab.y)) {
                    vec![Action::RenderNeeded]
                } else {
                    self.input = InputState::Idle;
                    Vec::new()
                }
            }
        }
    }

    /// Button released: end any gesture.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        self.end_gesture()
    }

    /// Pointer left the workspace: end any gesture.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        if !self.input.is_active() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]
    }

    /// Zoom one fixed step at the cursor.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let before = self.view;
        self.view.wheel_zoom(screen_pt, delta.dy);
        if self.view == before {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }

    // --- Drag and drop ---

    /// Accept a drag payload released over `target` at `screen_pt`.
    ///
    /// Workspace drops are converted to logical coordinates and centered on
    /// the drop point; tray drops append a tray item. Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns a [`PayloadError`] if the payload is not a polygon; nothing is
    /// added in that case.
    pub fn on_drop(&mut self, target: DropTarget, raw: &str, screen_pt: Point) -> Result<ObjectId, PayloadError> {
        let descriptor = payload::decode(raw)?;
        let id = match target {
            DropTarget::Tray => self.doc.push_tray(descriptor),
            DropTarget::Workspace => {
                let world = self.view.screen_to_world(screen_pt);
                self.doc.push_placed(descriptor, centered_offset(world))
            }
        };
        Ok(id)
    }

    // --- Persistence ---

    /// Current tray, workspace, and transform as a persisted record.
    #[must_use]
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            tray: self.doc.tray().iter().map(|t| t.descriptor.clone()).collect(),
            workspace: self
                .doc
                .placed()
                .iter()
                .map(|p| PersistedPlacement {
                    points: p.descriptor.points.clone(),
                    color: p.descriptor.color.clone(),
                    offset: p.offset,
                })
                .collect(),
            transform: self.view,
        }
    }

    /// Replace all in-memory state with a persisted record.
    pub fn restore(&mut self, state: PersistedState) {
        let placed = state
            .workspace
            .into_iter()
            .map(|p| (PolygonDescriptor { points: p.points, color: p.color }, p.offset))
            .collect();
        self.doc.load(state.tray, placed);
        self.view = state.transform.clamped();
        self.input = InputState::Idle;
    }

    /// Write the current state to `store`.
    ///
    /// # Errors
    ///
    /// Propagates encode and storage errors.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), PersistError> {
        persist::write(store, &self.snapshot())
    }

    /// Restore state from `store`. Returns `Ok(false)` when nothing is saved.
    ///
    /// # Errors
    ///
    /// Propagates storage errors and [`PersistError::Decode`]; in both cases
    /// the in-memory state is left untouched.
    pub fn load(&mut self, store: &impl KeyValueStore) -> Result<bool, PersistError> {
        let Some(state) = persist::read(store)? else {
            return Ok(false);
        };
        self.restore(state);
        Ok(true)
    }

    /// Clear everything back to defaults and delete the saved record.
    ///
    /// # Errors
    ///
    /// Propagates the storage error if the record could not be removed; the
    /// in-memory state is cleared regardless.
    pub fn reset(&mut self, store: &mut impl KeyValueStore) -> Result<(), PersistError> {
        self.clear();
        persist::remove(store)
    }

    /// Empty tray and workspace, identity view, no gesture. Storage is untouched.
    pub fn clear(&mut self) {
        self.doc.clear();
        self.view = ViewTransform::default();
        self.input = InputState::Idle;
    }
}
