//! Shared numeric constants for the canvas crate.

// ── View transform ──────────────────────────────────────────────

/// Smallest allowed view scale.
pub const SCALE_MIN: f64 = 0.2;

/// Largest allowed view scale.
pub const SCALE_MAX: f64 = 3.0;

/// Fixed scale increment applied per wheel event, regardless of delta magnitude.
pub const ZOOM_STEP: f64 = 0.1;

// ── Polygon generator ───────────────────────────────────────────

/// Side length of the local coordinate space a descriptor is drawn in.
pub const LOCAL_SIZE: f64 = 100.0;

/// Center of the local coordinate space; vertices are placed around it.
pub const LOCAL_CENTER: f64 = LOCAL_SIZE / 2.0;

/// Fewest vertices a generated polygon may have.
pub const MIN_VERTICES: u32 = 3;

/// Most vertices a generated polygon may have.
pub const MAX_VERTICES: u32 = 7;

/// Inclusive lower bound of the per-vertex radius.
pub const MIN_RADIUS: f64 = 30.0;

/// Width of the per-vertex radius jitter; radii fall in `[MIN_RADIUS, MIN_RADIUS + RADIUS_JITTER)`.
pub const RADIUS_JITTER: f64 = 20.0;

/// Fill color of every generated polygon.
pub const POLYGON_COLOR: &str = "red";

// ── Tray ────────────────────────────────────────────────────────

/// Fewest polygons `populate` inserts.
pub const MIN_TRAY_ITEMS: usize = 5;

/// Most polygons `populate` inserts.
pub const MAX_TRAY_ITEMS: usize = 20;

// ── Axis overlay ────────────────────────────────────────────────

/// Distance of the horizontal axis from the bottom of the canvas, in pixels.
pub const AXIS_MARGIN_PX: f64 = 50.0;

/// Grid spacing at scale 1, in pixels.
pub const GRID_STEP_PX: f64 = 50.0;

/// Above this scale every grid line gets a label instead of every other one.
pub const DENSE_LABEL_SCALE: f64 = 1.5;

/// Origin marker radius in pixels.
pub const ORIGIN_MARKER_RADIUS_PX: f64 = 3.0;

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the persisted widget state.
pub const STORAGE_KEY: &str = "polygonAppState";

/// Type tag carried by every drag-and-drop payload.
pub const PAYLOAD_TYPE: &str = "polygon";
