//! Binds the host page's create/save/reset buttons to the widget.
//!
//! The buttons live outside the mounted component, so they are looked up by
//! id once on mount and wired with plain DOM listeners.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::ui::{HostControl, RESET_PROMPT, SAVED_MESSAGE};
use crate::state::workspace::WorkspaceState;
use crate::util::{rng, storage::LocalStore};

/// Attach click listeners for every [`HostControl`] present on the page.
///
/// Missing buttons are logged and skipped.
pub fn bind(state: RwSignal<WorkspaceState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; host controls not bound");
        return;
    };
    for control in HostControl::ALL {
        let Some(button) = document.get_element_by_id(control.element_id()) else {
            log::warn!("host control #{} not found", control.element_id());
            continue;
        };
        let handler = Closure::<dyn FnMut()>::new(move || run(control, state));
        if let Err(e) = button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
            log::warn!("failed to bind #{}: {e:?}", control.element_id());
            continue;
        }
        // Listeners live as long as the page.
        handler.forget();
    }
}

fn run(control: HostControl, state: RwSignal<WorkspaceState>) {
    match control {
        HostControl::Create => {
            let mut rng = rng::fresh();
            state.update(|s| {
                s.create(&mut rng);
            });
        }
        HostControl::Save => {
            let saved = LocalStore::open().and_then(|mut store| state.with_untracked(|s| s.save_to(&mut store)));
            match saved {
                Ok(()) => alert(SAVED_MESSAGE),
                Err(e) => log::error!("save failed: {e}"),
            }
        }
        HostControl::Reset => {
            if !confirm(RESET_PROMPT) {
                return;
            }
            state.update(|s| match LocalStore::open() {
                Ok(mut store) => {
                    if let Err(e) = s.reset_with(&mut store) {
                        log::error!("failed to delete saved state: {e}");
                    }
                }
                Err(e) => {
                    log::error!("storage unavailable, clearing memory only: {e}");
                    s.clear();
                }
            });
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|w| match w.confirm_with_message(message) {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("confirm dialog failed: {e:?}");
            false
        }
    })
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.alert_with_message(message) {
            log::warn!("alert dialog failed: {e:?}");
        }
    }
}
