#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use canvas::camera::Point;
use canvas::doc::ObjectId;
use canvas::engine::{Action, CURSOR_DEFAULT, EngineCore};
use canvas::input::{DropTarget, InputState};
use canvas::persist::{KeyValueStore, PersistError};
use rand::Rng;

/// Reactive wrapper around the engine plus the cursor it last requested.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub engine: EngineCore,
    pub cursor: String,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self { engine: EngineCore::default(), cursor: CURSOR_DEFAULT.to_owned() }
    }
}

impl WorkspaceState {
    /// Apply engine actions to the DOM-facing fields.
    ///
    /// Returns `true` when subscribers need to be notified, i.e. the engine
    /// asked for a repaint or the cursor actually changed.
    pub fn apply(&mut self, actions: Vec<Action>) -> bool {
        let mut changed = false;
        for action in actions {
            match action {
                Action::RenderNeeded => changed = true,
                Action::SetCursor(cursor) => {
                    if self.cursor != cursor {
                        self.cursor = cursor;
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    /// Tray item ids in display order.
    pub fn tray_ids(&self) -> Vec<ObjectId> {
        self.engine.doc.tray().iter().map(|t| t.id).collect()
    }

    /// Placed polygon ids in draw order.
    pub fn placed_ids(&self) -> Vec<ObjectId> {
        self.engine.doc.placed().iter().map(|p| p.id).collect()
    }

    /// Text for the scale indicator in the workspace corner.
    pub fn scale_text(&self) -> String {
        canvas::render::scale_label(self.engine.view.scale)
    }

    /// Drop any half-finished gesture and reset the cursor.
    ///
    /// Called after the document is replaced wholesale so a drag that
    /// referenced a removed shape cannot resume.
    pub fn settle(&mut self) {
        self.engine.input = InputState::Idle;
        CURSOR_DEFAULT.clone_into(&mut self.cursor);
    }

    /// Accept a drag payload over `target`. Foreign or malformed payloads are
    /// logged and ignored; returns whether anything was added.
    pub fn accept_drop(&mut self, target: DropTarget, raw: &str, screen_pt: Point) -> bool {
        match self.engine.on_drop(target, raw, screen_pt) {
            Ok(id) => {
                log::debug!("dropped polygon {id} onto {target:?}");
                true
            }
            Err(e) => {
                log::warn!("ignoring drop onto {target:?}: {e}");
                false
            }
        }
    }

    /// Refill the tray with a fresh random batch.
    pub fn create<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let count = self.engine.populate(rng);
        log::info!("generated {count} tray polygons");
        count
    }

    /// Restore saved state from `store`, if any.
    ///
    /// A missing record is a no-op. A malformed record is logged and left in
    /// place, and the in-memory state stays as it was.
    pub fn load_from(&mut self, store: &impl KeyValueStore) -> bool {
        match self.engine.load(store) {
            Ok(true) => {
                self.settle();
                log::info!(
                    "restored {} tray and {} workspace polygons",
                    self.engine.doc.tray().len(),
                    self.engine.doc.placed().len()
                );
                true
            }
            Ok(false) => {
                log::debug!("no saved state");
                false
            }
            Err(e) => {
                log::warn!("ignoring saved state: {e}");
                false
            }
        }
    }

    /// Persist the current state to `store`.
    ///
    /// # Errors
    ///
    /// Propagates encode and storage errors.
    pub fn save_to(&self, store: &mut impl KeyValueStore) -> Result<(), PersistError> {
        self.engine.save(store)?;
        log::info!(
            "saved {} tray and {} workspace polygons",
            self.engine.doc.tray().len(),
            self.engine.doc.placed().len()
        );
        Ok(())
    }

    /// Clear everything and delete the saved record.
    ///
    /// # Errors
    ///
    /// Propagates the storage error; the in-memory state is cleared anyway.
    pub fn reset_with(&mut self, store: &mut impl KeyValueStore) -> Result<(), PersistError> {
        self.settle();
        self.engine.reset(store)?;
        log::info!("workspace reset");
        Ok(())
    }

    /// Clear in-memory state only, for when storage is unreachable.
    pub fn clear(&mut self) {
        self.settle();
        self.engine.clear();
    }
}
