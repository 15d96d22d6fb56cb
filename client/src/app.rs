//! Root application component and mounting.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::polygon_workspace::PolygonWorkspace;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Polygon Workspace"/>
        <PolygonWorkspace/>
    }
}

/// Mount [`App`] into the host page's `#polygon-app` element, or `<body>`
/// when the page does not provide one.
#[cfg(feature = "csr")]
pub fn mount() {
    use wasm_bindgen::JsCast;

    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(crate::state::ui::MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match host {
        Some(el) => {
            log::debug!("mounting into #{}", crate::state::ui::MOUNT_ID);
            leptos::mount::mount_to(el, App).forget();
        }
        None => {
            log::debug!("no #{} element; mounting into <body>", crate::state::ui::MOUNT_ID);
            leptos::mount::mount_to_body(App);
        }
    }
}
