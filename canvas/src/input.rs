//! Input model: mouse buttons, wheel deltas, drop targets, and the gesture
//! state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! Exactly one mode is active at a time; releasing the button or leaving the
//! canvas always returns to [`InputState::Idle`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ObjectId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Back, forward, or any other auxiliary button, by DOM code.
    Other(i16),
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Wheel / trackpad scroll delta. Only the vertical axis zooms.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Where a drag-and-drop payload was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The buffer tray.
    Tray,
    /// The pannable workspace canvas.
    Workspace,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the workspace by dragging empty space.
    Panning {
        /// Pointer position minus the translation at press time; the new
        /// translation is always `pointer - anchor`.
        anchor: Point,
    },
    /// The user is moving a placed polygon.
    DraggingShape {
        /// Id of the polygon being dragged.
        id: ObjectId,
        /// Logical pointer position minus the shape offset at press time.
        grab: Point,
    },
}

impl InputState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
