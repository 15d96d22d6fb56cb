#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{SCALE_MAX, SCALE_MIN, ZOOM_STEP};

/// A point in either screen or logical (workspace) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Global pan/zoom transform applied to the workspace content.
///
/// `translate_x` / `translate_y` are in CSS pixels relative to the canvas
/// element. `scale` is a uniform factor kept within
/// [`SCALE_MIN`]..=[`SCALE_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl ViewTransform {
    /// Convert a screen-space point (CSS pixels) to logical coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.translate_x) / self.scale,
            y: (screen.y - self.translate_y) / self.scale,
        }
    }

    /// Convert a logical point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.translate_x,
            y: world.y * self.scale + self.translate_y,
        }
    }

    /// The translation as a point.
    #[must_use]
    pub fn translation(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Move the translation so that it equals `t`.
    pub fn set_translation(&mut self, t: Point) {
        self.translate_x = t.x;
        self.translate_y = t.y;
    }

    /// Change scale to `new_scale` (clamped) while keeping the logical point
    /// under `cursor` at the same screen position.
    pub fn zoom_at(&mut self, cursor: Point, new_scale: f64) {
        let next = clamp_scale(new_scale);
        let ratio = next / self.scale;
        self.translate_x = cursor.x - (cursor.x - self.translate_x) * ratio;
        self.translate_y = cursor.y - (cursor.y - self.translate_y) * ratio;
        self.scale = next;
    }

    /// Apply one wheel notch at `cursor`. Positive `dy` (scrolling down) zooms
    /// out by [`ZOOM_STEP`], anything else zooms in by the same step.
    pub fn wheel_zoom(&mut self, cursor: Point, dy: f64) {
        let delta = if dy > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        self.zoom_at(cursor, self.scale + delta);
    }

    /// Copy of `self` with the scale forced back into range.
    ///
    /// Used for transforms read from storage, which are not trusted to honour
    /// the scale limits.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            scale: clamp_scale(self.scale),
            translate_x: finite_or_zero(self.translate_x),
            translate_y: finite_or_zero(self.translate_y),
        }
    }

    /// SVG `transform` attribute value for the viewport group.
    #[must_use]
    pub fn svg_transform(&self) -> String {
        format!("translate({}, {}) scale({})", self.translate_x, self.translate_y, self.scale)
    }
}

/// Clamp a scale into [`SCALE_MIN`]..=[`SCALE_MAX`]. Non-finite input resets to 1.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_finite() { scale.clamp(SCALE_MIN, SCALE_MAX) } else { 1.0 }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
