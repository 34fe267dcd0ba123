//! # Floorplan Designer
//!
//! Shape model, wizard templates, snapping, view state, undo/redo history
//! and export for the floor-plan wizard.
//!
//! ## Core Components
//!
//! - **Model**: shapes as world-feet vertex lists with type, layer and style
//! - **Templates**: plot presets, rectangle / L / mirrored L / U outlines
//! - **Snapping**: grid snap and nearest vertex/edge snap
//! - **Viewport**: pan and zoom of the editing canvas
//! - **Tools**: pointer gestures that produce shape commands
//! - **Designer state**: the store, with commands, selection and history
//! - **Export**: metadata/project JSON and an A2 PNG rendered with tiny-skia
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── Shapes ── DesignerCommand ── CheckpointPolicy ── History
//!   ├── Selection
//!   ├── ToolSession (active tool) ── Snapping
//!   └── Viewport (ViewTransform, canvas size, editing DPI)
//!
//! Exporter ── Renderer (RenderSurface) ── ProjectFile
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorplan_designer::{DesignerState, HouseTemplate, PlotPreset};
//!
//! let mut state = DesignerState::new();
//! state.add_plot(PlotPreset::TenMarla).unwrap();
//! state.add_house(HouseTemplate::LShaped).unwrap();
//! assert_eq!(state.shapes().len(), 2);
//!
//! state.undo();
//! assert_eq!(state.shapes().len(), 1);
//! ```

pub mod annotations;
pub mod commands;
pub mod designer_state;
pub mod export;
pub mod grid;
pub mod history;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod snapping;
pub mod templates;
pub mod tools;
pub mod viewport;
pub mod wizard;

pub use annotations::{edge_labels, handles, EdgeLabel, Handle, HandleKind};
pub use commands::{CheckpointPolicy, CommandKind, DesignerCommand};
pub use designer_state::DesignerState;
pub use export::{ExportMetadata, ExportSummary, Exporter};
pub use grid::{grid_lines, sheet_size_ft, GridAxis, GridLine};
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use model::{
    edge_lengths, edge_midpoint, generate_shape_id, path_lengths, shape_bounds,
    translate_vertices, Bounds, Color, Layer, Shape, ShapeId, ShapeMetadata, ShapePatch,
    ShapeType,
};
pub use renderer::{
    render_plan, PathStyle, PixmapProvider, PixmapSurface, RenderSurface, SurfaceProvider,
};
pub use serialization::{ProjectFile, ProjectMetadata};
pub use snapping::{
    snap, snap_point_to_grid, snap_to_geometry, snap_to_grid, GridSettings, GridSnap, SnapMode,
    SnapResult, SnapSettings, SnapTarget,
};
pub use templates::{
    create_l_shape, create_rectangle, create_u_shape, Dimensions, HouseTemplate, PlotPreset,
};
pub use tools::{
    Measurement, PointerEvent, ToolAction, ToolContext, ToolSession, ToolStyle, ToolType,
};
pub use viewport::{ViewUpdate, Viewport, WheelDirection};
pub use wizard::WizardStep;

pub use floorplan_core::{CanvasPoint, ExportPoint, WorldPoint};
