use super::*;
use canvas::camera::Point;
use canvas::engine::CURSOR_GRABBING;
use canvas::consts::{MAX_TRAY_ITEMS, MIN_TRAY_ITEMS, STORAGE_KEY};
use canvas::input::Button;
use canvas::payload;
use canvas::persist::MemoryStore;
use canvas::polygon::PolygonDescriptor;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn square(size: f64) -> PolygonDescriptor {
    PolygonDescriptor::from_vertices(
        &[Point::new(0.0, 0.0), Point::new(size, 0.0), Point::new(size, size), Point::new(0.0, size)],
        "red",
    )
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_cursor_is_default() {
    let state = WorkspaceState::default();
    assert_eq!(state.cursor, CURSOR_DEFAULT);
    assert!(state.engine.doc.is_empty());
}

#[test]
fn default_scale_text_is_one_hundred_percent() {
    assert_eq!(WorkspaceState::default().scale_text(), "100%");
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_empty_actions_reports_unchanged() {
    let mut state = WorkspaceState::default();
    assert!(!state.apply(Vec::new()));
}

#[test]
fn apply_render_needed_reports_changed() {
    let mut state = WorkspaceState::default();
    assert!(state.apply(vec![Action::RenderNeeded]));
    assert_eq!(state.cursor, CURSOR_DEFAULT);
}

#[test]
fn apply_set_cursor_updates_cursor() {
    let mut state = WorkspaceState::default();
    assert!(state.apply(vec![Action::SetCursor(CURSOR_GRABBING.to_owned())]));
    assert_eq!(state.cursor, CURSOR_GRABBING);
}

#[test]
fn apply_same_cursor_reports_unchanged() {
    let mut state = WorkspaceState::default();
    assert!(!state.apply(vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]));
}

#[test]
fn pan_gesture_round_trip_restores_default_cursor() {
    let mut state = WorkspaceState::default();
    let down = state.engine.on_pointer_down(Point::new(10.0, 10.0), Button::Primary);
    assert!(state.apply(down));
    assert_eq!(state.cursor, CURSOR_GRABBING);

    let up = state.engine.on_pointer_up(Point::new(10.0, 10.0), Button::Primary);
    assert!(state.apply(up));
    assert_eq!(state.cursor, CURSOR_DEFAULT);
}

#[test]
fn scale_text_follows_zoom() {
    let mut state = WorkspaceState::default();
    state.engine.view.zoom_at(Point::new(0.0, 0.0), 1.5);
    assert_eq!(state.scale_text(), "150%");
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_ends_drag_and_resets_cursor() {
    let mut state = WorkspaceState::default();
    state.engine.doc.push_placed(square(100.0), Point::new(0.0, 0.0));
    let down = state.engine.on_pointer_down(Point::new(50.0, 50.0), Button::Primary);
    state.apply(down);
    assert!(state.engine.input.is_active());

    state.settle();
    assert!(!state.engine.input.is_active());
    assert_eq!(state.cursor, CURSOR_DEFAULT);
}

// =============================================================
// Drops
// =============================================================

#[test]
fn accept_drop_places_polygon_centered_on_point() {
    let mut state = WorkspaceState::default();
    let raw = payload::encode(&square(100.0)).unwrap();
    assert!(state.accept_drop(DropTarget::Workspace, &raw, Point::new(120.0, 80.0)));
    let placed = &state.engine.doc.placed()[0];
    assert_eq!(placed.offset, Point::new(70.0, 30.0));
}

#[test]
fn accept_drop_onto_tray_appends_item() {
    let mut state = WorkspaceState::default();
    let raw = payload::encode(&square(10.0)).unwrap();
    assert!(state.accept_drop(DropTarget::Tray, &raw, Point::default()));
    assert_eq!(state.engine.doc.tray().len(), 1);
    assert!(state.engine.doc.placed().is_empty());
}

#[test]
fn accept_drop_rejects_foreign_payload() {
    let mut state = WorkspaceState::default();
    let raw = r#"{"type":"image","points":[],"color":"red"}"#;
    assert!(!state.accept_drop(DropTarget::Workspace, raw, Point::default()));
    assert!(!state.accept_drop(DropTarget::Tray, "not json", Point::default()));
    assert!(state.engine.doc.is_empty());
}

// =============================================================
// Host controls
// =============================================================

#[test]
fn create_fills_tray_within_bounds() {
    let mut state = WorkspaceState::default();
    let count = state.create(&mut SmallRng::seed_from_u64(3));
    assert!((MIN_TRAY_ITEMS..=MAX_TRAY_ITEMS).contains(&count));
    assert_eq!(state.engine.doc.tray().len(), count);
}

#[test]
fn save_then_load_restores_state() {
    let mut state = WorkspaceState::default();
    state.create(&mut SmallRng::seed_from_u64(9));
    state.engine.doc.push_placed(square(50.0), Point::new(5.0, 6.0));
    let mut store = MemoryStore::new();
    state.save_to(&mut store).unwrap();

    let mut restored = WorkspaceState::default();
    assert!(restored.load_from(&store));
    assert_eq!(restored.engine.snapshot(), state.engine.snapshot());
}

#[test]
fn load_from_empty_store_is_noop() {
    let mut state = WorkspaceState::default();
    assert!(!state.load_from(&MemoryStore::new()));
    assert!(state.engine.doc.is_empty());
}

#[test]
fn load_from_malformed_record_keeps_current_state() {
    let mut state = WorkspaceState::default();
    state.create(&mut SmallRng::seed_from_u64(1));
    let before = state.engine.snapshot();

    let mut store = MemoryStore::new();
    canvas::persist::KeyValueStore::set_item(&mut store, STORAGE_KEY, "{broken").unwrap();
    assert!(!state.load_from(&store));
    assert_eq!(state.engine.snapshot(), before);
}

#[test]
fn reset_with_clears_memory_and_store() {
    let mut state = WorkspaceState::default();
    state.create(&mut SmallRng::seed_from_u64(4));
    let mut store = MemoryStore::new();
    state.save_to(&mut store).unwrap();

    state.reset_with(&mut store).unwrap();
    assert!(state.engine.doc.is_empty());
    assert!(!store.contains(STORAGE_KEY));
    assert_eq!(state.cursor, CURSOR_DEFAULT);
}

#[test]
fn clear_keeps_saved_record() {
    let mut state = WorkspaceState::default();
    state.create(&mut SmallRng::seed_from_u64(4));
    let mut store = MemoryStore::new();
    state.save_to(&mut store).unwrap();

    state.clear();
    assert!(state.engine.doc.is_empty());
    assert!(store.contains(STORAGE_KEY));
}

// =============================================================
// Id lists
// =============================================================

#[test]
fn id_lists_follow_document_order() {
    let mut state = WorkspaceState::default();
    state.create(&mut SmallRng::seed_from_u64(6));
    let first = state.engine.doc.push_placed(square(10.0), Point::new(0.0, 0.0));
    let second = state.engine.doc.push_placed(square(10.0), Point::new(40.0, 0.0));

    let tray: Vec<_> = state.engine.doc.tray().iter().map(|t| t.id).collect();
    assert_eq!(state.tray_ids(), tray);
    assert_eq!(state.placed_ids(), vec![first, second]);
}

#[test]
fn id_lists_are_stable_across_gestures() {
    let mut state = WorkspaceState::default();
    state.create(&mut SmallRng::seed_from_u64(8));
    state.engine.doc.push_placed(square(100.0), Point::new(0.0, 0.0));
    let tray_before = state.tray_ids();
    let placed_before = state.placed_ids();

    // drag the shape, then pan empty space
    let down = state.engine.on_pointer_down(Point::new(50.0, 50.0), Button::Primary);
    state.apply(down);
    let moved = state.engine.on_pointer_move(Point::new(90.0, 70.0));
    assert!(state.apply(moved));
    let up = state.engine.on_pointer_up(Point::new(90.0, 70.0), Button::Primary);
    state.apply(up);
    let down = state.engine.on_pointer_down(Point::new(400.0, 400.0), Button::Primary);
    state.apply(down);
    let moved = state.engine.on_pointer_move(Point::new(420.0, 380.0));
    assert!(state.apply(moved));

    assert_eq!(state.tray_ids(), tray_before);
    assert_eq!(state.placed_ids(), placed_before);
}
