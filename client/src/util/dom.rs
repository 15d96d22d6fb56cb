//! Event helpers shared by the zone components.
//!
//! Positions are measured against an element's bounding box so events
//! bubbling up from child shapes still report workspace-relative pixels.

use canvas::camera::Point;
use leptos::ev::{DragEvent, MouseEvent};
use leptos::prelude::*;

/// Event position relative to the top-left corner of `node`.
///
/// Returns `None` before the element is mounted, or outside the browser.
pub fn local_point(node: NodeRef<leptos::svg::Svg>, ev: &MouseEvent) -> Option<Point> {
    #[cfg(feature = "csr")]
    {
        let el = node.get_untracked()?;
        let rect = el.get_bounding_client_rect();
        Some(Point::new(
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
        ))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (node, ev);
        None
    }
}

/// Rendered size of `node` in CSS pixels.
pub fn client_size(node: NodeRef<leptos::svg::Svg>) -> Option<(f64, f64)> {
    #[cfg(feature = "csr")]
    {
        let el = node.get_untracked()?;
        Some((f64::from(el.client_width()), f64::from(el.client_height())))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = node;
        None
    }
}

/// Attach a polygon payload to a starting drag.
pub fn set_drag_data(ev: &DragEvent, raw: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(dt) = ev.data_transfer() else {
            log::warn!("dragstart without dataTransfer");
            return;
        };
        if let Err(e) = dt.set_data(canvas::payload::PAYLOAD_MIME, raw) {
            log::warn!("failed to set drag data: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, raw);
    }
}

/// Read the payload carried by a drop, if any.
pub fn drag_data(ev: &DragEvent) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let dt = ev.data_transfer()?;
        match dt.get_data(canvas::payload::PAYLOAD_MIME) {
            Ok(raw) if !raw.is_empty() => Some(raw),
            Ok(_) => None,
            Err(e) => {
                log::warn!("failed to read drag data: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

/// Allow dropping and show the move cursor while dragging over a zone.
pub fn allow_drop(ev: &DragEvent) {
    ev.prevent_default();
    #[cfg(feature = "csr")]
    {
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    }
}
