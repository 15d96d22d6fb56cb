//! Fixed-position axes, grid, and tick labels drawn over the workspace.

use canvas::consts::ORIGIN_MARKER_RADIUS_PX;
use canvas::render::{Label, Line, axis_overlay};
use leptos::prelude::*;

use crate::state::workspace::WorkspaceState;

/// Rebuilt in full whenever the viewport size or scale changes.
#[component]
pub fn AxisOverlay() -> impl IntoView {
    let state = expect_context::<RwSignal<WorkspaceState>>();

    let geometry = Memo::new(move |_| {
        state.with(|s| axis_overlay(s.engine.viewport_width, s.engine.viewport_height, s.engine.view.scale))
    });

    move || {
        let overlay = geometry.get();
        view! {
            <g id="axes">
                {overlay.grid.into_iter().map(|line| line_view(line, "grid-line")).collect_view()}
                {line_view(overlay.x_axis, "axis")}
                {line_view(overlay.y_axis, "axis")}
                <circle class="origin-marker" cx=overlay.origin.x cy=overlay.origin.y r=ORIGIN_MARKER_RADIUS_PX/>
                {overlay.labels.into_iter().map(label_view).collect_view()}
                {label_view(overlay.origin_label)}
            </g>
        }
    }
}

fn line_view(line: Line, class: &'static str) -> impl IntoView {
    view! { <line class=class x1=line.x1 y1=line.y1 x2=line.x2 y2=line.y2/> }
}

fn label_view(label: Label) -> impl IntoView {
    view! {
        <text class="axis-label" x=label.x y=label.y text-anchor=label.anchor.as_str()>
            {label.text}
        </text>
    }
}
