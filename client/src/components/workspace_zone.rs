//! Pannable, zoomable SVG workspace.
//!
//! DOM events are converted to workspace-relative pixels and handed to the
//! engine; the view re-renders from engine state. Placed shapes carry no
//! listeners of their own: the engine hit-tests presses against them.

use canvas::doc::{ObjectId, PlacedPolygon};
use canvas::input::{Button, DropTarget, WheelDelta};
use leptos::ev::{DragEvent, MouseEvent, WheelEvent};
use leptos::prelude::*;

use super::axis_overlay::AxisOverlay;
use crate::state::ui::WORKSPACE_TITLE;
use crate::state::workspace::WorkspaceState;
use crate::util::dom;

#[component]
pub fn WorkspaceZone() -> impl IntoView {
    let state = expect_context::<RwSignal<WorkspaceState>>();
    let svg_ref = NodeRef::<leptos::svg::Svg>::new();

    let measure = move || {
        if let Some((w, h)) = dom::client_size(svg_ref) {
            state.update(|s| s.engine.set_viewport(w, h));
        }
    };

    // Size the overlay once mounted, then track window resizes.
    Effect::new(move |_| {
        if svg_ref.get().is_some() {
            measure();
        }
    });
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let on_mousedown = move |ev: MouseEvent| {
        let Some(pt) = dom::local_point(svg_ref, &ev) else {
            return;
        };
        let button = Button::from_dom(ev.button());
        state.maybe_update(|s| {
            let actions = s.engine.on_pointer_down(pt, button);
            s.apply(actions)
        });
    };

    let on_mousemove = move |ev: MouseEvent| {
        let Some(pt) = dom::local_point(svg_ref, &ev) else {
            return;
        };
        state.maybe_update(|s| {
            let actions = s.engine.on_pointer_move(pt);
            s.apply(actions)
        });
    };

    let on_mouseup = move |ev: MouseEvent| {
        let pt = dom::local_point(svg_ref, &ev).unwrap_or_default();
        let button = Button::from_dom(ev.button());
        state.maybe_update(|s| {
            let actions = s.engine.on_pointer_up(pt, button);
            s.apply(actions)
        });
    };

    let on_mouseleave = move |_: MouseEvent| {
        state.maybe_update(|s| {
            let actions = s.engine.on_pointer_leave();
            s.apply(actions)
        });
    };

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let Some(pt) = dom::local_point(svg_ref, &ev) else {
            return;
        };
        let delta = WheelDelta { dy: ev.delta_y() };
        state.maybe_update(|s| {
            let actions = s.engine.on_wheel(pt, delta);
            s.apply(actions)
        });
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let (Some(raw), Some(pt)) = (dom::drag_data(&ev), dom::local_point(svg_ref, &ev)) else {
            return;
        };
        state.maybe_update(|s| s.accept_drop(DropTarget::Workspace, &raw, pt));
    };

    // Gestures notify on every move; the memo only fires when the id list changes.
    let placed_ids = Memo::new(move |_| state.with(WorkspaceState::placed_ids));
    let viewport_transform = move || state.with(|s| s.engine.view.svg_transform());
    let cursor = move || state.with(|s| s.cursor.clone());
    let scale_text = move || state.with(WorkspaceState::scale_text);

    view! {
        <div class="workspace-zone zone" on:dragover=|ev: DragEvent| dom::allow_drop(&ev) on:drop=on_drop>
            <div class="zone-header">{WORKSPACE_TITLE}</div>
            <svg
                id="workspace-svg"
                node_ref=svg_ref
                style:cursor=cursor
                on:mousedown=on_mousedown
                on:mousemove=on_mousemove
                on:mouseup=on_mouseup
                on:mouseleave=on_mouseleave
                on:wheel=on_wheel
            >
                <rect width="100%" height="100%" fill="rgba(10, 15, 30, 0.5)"></rect>
                <g id="viewport" transform=viewport_transform>
                    <For each=move || placed_ids.get() key=|id| *id children=move |shape_id| view! { <PlacedShape shape_id/> }/>
                </g>
                <AxisOverlay/>
            </svg>
            <div class="scale-info">{scale_text}</div>
        </div>
    }
}

/// A polygon on the workspace. Only its offset changes after placement.
#[component]
fn PlacedShape(shape_id: ObjectId) -> impl IntoView {
    let state = expect_context::<RwSignal<WorkspaceState>>();

    let (points, color) = state.with_untracked(|s| {
        s.engine
            .doc
            .placed_polygon(&shape_id)
            .map(|p| (p.descriptor.points_attr(), p.descriptor.color.clone()))
            .unwrap_or_default()
    });
    let transform = move || {
        state.with(|s| {
            s.engine
                .doc
                .placed_polygon(&shape_id)
                .map(PlacedPolygon::svg_transform)
                .unwrap_or_default()
        })
    };

    view! {
        <g class="workspace-polygon" transform=transform>
            <polygon points=points fill=color/>
        </g>
    }
}
