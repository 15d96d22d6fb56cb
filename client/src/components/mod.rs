//! View components. All of them read the shared `RwSignal<WorkspaceState>`
//! from context; only `PolygonWorkspace` creates it.

pub mod axis_overlay;
pub mod buffer_zone;
pub mod polygon_workspace;
pub mod workspace_zone;
