//! Root widget: tray above, workspace below.

use leptos::prelude::*;

use super::buffer_zone::BufferZone;
use super::workspace_zone::WorkspaceZone;
use crate::state::workspace::WorkspaceState;

/// The polygon workspace widget.
///
/// Provides the shared state, restores any saved arrangement, and binds the
/// host page's create/save/reset buttons.
#[component]
pub fn PolygonWorkspace() -> impl IntoView {
    let state = RwSignal::new(WorkspaceState::default());
    provide_context(state);

    #[cfg(feature = "csr")]
    {
        match crate::util::storage::LocalStore::open() {
            Ok(store) => {
                state.update_untracked(|s| {
                    s.load_from(&store);
                });
            }
            Err(e) => log::warn!("saved state not loaded: {e}"),
        }
        crate::util::host_controls::bind(state);
    }

    view! {
        <div class="polygon-app">
            <BufferZone/>
            <WorkspaceZone/>
        </div>
    }
}
