//! Polygon workspace engine.
//!
//! This crate owns every piece of the widget that does not need a browser:
//! the polygon generator, the tray and workspace contents, the pan/zoom view
//! transform, the pointer/wheel/drop state machine, the axis overlay
//! projection, and the persisted-state codec. The `client` crate renders the
//! state as HTML/SVG and forwards DOM events to [`engine::EngineCore`], which
//! answers with [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`] state and its update functions |
//! | [`doc`] | Tray items, placed polygons, and the in-memory store |
//! | [`polygon`] | Polygon descriptors and the random generator |
//! | [`camera`] | View transform and screen/logical conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Point-in-polygon hit-testing for placed shapes |
//! | [`payload`] | Drag-and-drop text payload codec |
//! | [`persist`] | Persisted state record and key-value store seam |
//! | [`render`] | Axis/grid overlay and SVG attribute projection |
//! | [`consts`] | Shared numeric constants (zoom limits, generator ranges, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod payload;
pub mod persist;
pub mod polygon;
pub mod render;
