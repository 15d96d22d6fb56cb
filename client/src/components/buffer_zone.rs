//! Tray of unplaced polygons. Items are HTML5 drag sources; the zone itself
//! accepts drops and appends a copy.

use canvas::camera::Point;
use canvas::doc::ObjectId;
use canvas::input::DropTarget;
use canvas::render::LOCAL_VIEW_BOX;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::state::ui::TRAY_TITLE;
use crate::state::workspace::WorkspaceState;
use crate::util::dom;

#[component]
pub fn BufferZone() -> impl IntoView {
    let state = expect_context::<RwSignal<WorkspaceState>>();

    let item_ids = Memo::new(move |_| state.with(WorkspaceState::tray_ids));

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(raw) = dom::drag_data(&ev) else {
            return;
        };
        state.maybe_update(|s| s.accept_drop(DropTarget::Tray, &raw, Point::default()));
    };

    view! {
        <div class="buffer-zone zone" on:dragover=|ev: DragEvent| dom::allow_drop(&ev) on:drop=on_drop>
            <div class="zone-header">{TRAY_TITLE}</div>
            <For each=move || item_ids.get() key=|id| *id children=move |item_id| view! { <TrayPolygon item_id/> }/>
        </div>
    }
}

/// One draggable tray entry drawn in its 100×100 local space.
#[component]
fn TrayPolygon(item_id: ObjectId) -> impl IntoView {
    let state = expect_context::<RwSignal<WorkspaceState>>();
    let (points, color) = state.with_untracked(|s| {
        s.engine
            .doc
            .tray_item(&item_id)
            .map(|t| (t.descriptor.points_attr(), t.descriptor.color.clone()))
            .unwrap_or_default()
    });

    let on_dragstart = move |ev: DragEvent| match state.with_untracked(|s| s.engine.drag_payload(&item_id)) {
        Ok(raw) => dom::set_drag_data(&ev, &raw),
        Err(e) => log::warn!("tray drag not started: {e}"),
    };

    view! {
        <div class="polygon-container" draggable="true" on:dragstart=on_dragstart>
            <svg viewBox=LOCAL_VIEW_BOX>
                <polygon points=points fill=color/>
            </svg>
        </div>
    }
}
