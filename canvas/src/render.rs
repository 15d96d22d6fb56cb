//! Rendering projection: turns engine state into plain geometry that the host
//! draws as SVG.
//!
//! Nothing here touches the DOM. The axis overlay is recomputed from scratch
//! for every transform change; callers compare nothing and cache nothing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::Point;
use crate::consts::{AXIS_MARGIN_PX, DENSE_LABEL_SCALE, GRID_STEP_PX, LOCAL_SIZE};

/// `viewBox` for a descriptor drawn in its own local space (tray items).
pub const LOCAL_VIEW_BOX: &str = "0 0 100 100";

/// A line segment in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// SVG `text-anchor` for a tick label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

impl TextAnchor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// A numeric tick label in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
}

/// Everything the axis overlay draws for one canvas size and scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisOverlay {
    pub x_axis: Line,
    pub y_axis: Line,
    pub origin: Point,
    pub origin_label: Label,
    pub grid: Vec<Line>,
    pub labels: Vec<Label>,
}

/// Build the axis overlay for a `width` × `height` canvas at `scale`.
///
/// The horizontal axis sits [`AXIS_MARGIN_PX`] above the bottom edge and the
/// vertical axis runs along the left edge. Grid lines are spaced
/// `GRID_STEP_PX / scale` apart; every other line is labelled, or every line
/// once `scale` exceeds [`DENSE_LABEL_SCALE`].
#[must_use]
pub fn axis_overlay(width: f64, height: f64, scale: f64) -> AxisOverlay {
    let baseline = height - AXIS_MARGIN_PX;
    let step = GRID_STEP_PX / scale;
    let dense = scale > DENSE_LABEL_SCALE;

    let mut grid = Vec::new();
    let mut labels = Vec::new();

    for i in 1..step_count(height, step) {
        let y = height - f64::from(i) * step - AXIS_MARGIN_PX;
        grid.push(Line { x1: 0.0, y1: y, x2: width, y2: y });
        if i % 2 == 0 || dense {
            labels.push(Label {
                x: 10.0,
                y: y - 5.0,
                text: format_tick(f64::from(i) * step),
                anchor: TextAnchor::Start,
            });
        }
    }

    for i in 1..step_count(width, step) {
        let x = f64::from(i) * step;
        grid.push(Line { x1: x, y1: 0.0, x2: x, y2: height });
        if i % 2 == 0 || dense {
            labels.push(Label { x, y: height - 30.0, text: format_tick(x), anchor: TextAnchor::Middle });
        }
    }

    AxisOverlay {
        x_axis: Line { x1: 0.0, y1: baseline, x2: width, y2: baseline },
        y_axis: Line { x1: 0.0, y1: 0.0, x2: 0.0, y2: height },
        origin: Point::new(0.0, baseline),
        origin_label: Label { x: 10.0, y: height - 30.0, text: "0".to_owned(), anchor: TextAnchor::Start },
        grid,
        labels,
    }
}

/// Number of grid steps covering `extent`, i.e. `ceil(extent / step)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_count(extent: f64, step: f64) -> u32 {
    let steps = (extent / step).ceil();
    if !steps.is_finite() || steps <= 0.0 {
        return 0;
    }
    steps.min(f64::from(u32::MAX)) as u32
}

fn format_tick(value: f64) -> String {
    format!("{}", value.round())
}

/// Human-readable zoom readout, e.g. `"150%"`.
#[must_use]
pub fn scale_label(scale: f64) -> String {
    format!("{:.0}%", scale * 100.0)
}

/// Logical offset that centers a descriptor's local space on `world`.
#[must_use]
pub fn centered_offset(world: Point) -> Point {
    Point::new(world.x - LOCAL_SIZE / 2.0, world.y - LOCAL_SIZE / 2.0)
}
