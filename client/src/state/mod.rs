//! Client-side reactive state.
//!
//! DESIGN
//! ======
//! The widget keeps a single `RwSignal<WorkspaceState>` in context. All
//! document, camera, and gesture state lives in the wrapped
//! `canvas::engine::EngineCore`; this layer only adds what the DOM needs on
//! top (the current cursor) and the user-facing strings.

pub mod ui;
pub mod workspace;
